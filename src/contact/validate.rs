use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use super::EnquiryType;

pub const FIRST_NAME_MIN: usize = 2;
pub const FIRST_NAME_MAX: usize = 50;
pub const COMMENT_MIN: usize = 10;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern should compile")
});

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required")]
    Required,
    #[error("Too Short!")]
    TooShort,
    #[error("Too Long!")]
    TooLong,
    #[error("Invalid email")]
    InvalidEmail,
    #[error("Type is required")]
    TypeRequired,
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Required)
    } else {
        Ok(())
    }
}

fn length_between(value: &str, min: usize, max: Option<usize>) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min {
        return Err(ValidationError::TooShort);
    }
    match max {
        Some(max) if len > max => Err(ValidationError::TooLong),
        _ => Ok(()),
    }
}

pub fn first_name(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    length_between(value, FIRST_NAME_MIN, Some(FIRST_NAME_MAX))
}

pub fn email(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

pub fn enquiry(value: &str) -> Result<EnquiryType, ValidationError> {
    value
        .parse::<EnquiryType>()
        .map_err(|_| ValidationError::TypeRequired)
}

pub fn comment(value: &str) -> Result<(), ValidationError> {
    required(value)?;
    length_between(value, COMMENT_MIN, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name_bounds() {
        assert_eq!(first_name(""), Err(ValidationError::Required));
        assert_eq!(first_name("A"), Err(ValidationError::TooShort));
        assert_eq!(first_name("Al"), Ok(()));
        assert_eq!(first_name(&"x".repeat(50)), Ok(()));
        assert_eq!(first_name(&"x".repeat(51)), Err(ValidationError::TooLong));
    }

    #[test]
    fn test_first_name_counts_chars_not_bytes() {
        assert_eq!(first_name("Zoë"), Ok(()));
        assert_eq!(first_name(&"é".repeat(50)), Ok(()));
    }

    #[test]
    fn test_email() {
        assert_eq!(email(""), Err(ValidationError::Required));
        assert_eq!(email("a@b.com"), Ok(()));
        assert_eq!(email("first.last+tag@mail.example.org"), Ok(()));
        assert_eq!(email("plainaddress"), Err(ValidationError::InvalidEmail));
        assert_eq!(email("a@b"), Err(ValidationError::InvalidEmail));
        assert_eq!(email("a @b.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(email("@b.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_enquiry() {
        assert_eq!(enquiry("hireMe"), Ok(EnquiryType::HireMe));
        assert_eq!(enquiry("openSource"), Ok(EnquiryType::OpenSource));
        assert_eq!(enquiry("other"), Ok(EnquiryType::Other));
        assert_eq!(enquiry(""), Err(ValidationError::TypeRequired));
        assert_eq!(enquiry("spam"), Err(ValidationError::TypeRequired));
    }

    #[test]
    fn test_comment_min_length() {
        assert_eq!(comment(""), Err(ValidationError::Required));
        assert_eq!(comment("123456789"), Err(ValidationError::TooShort));
        assert_eq!(comment("1234567890"), Ok(()));
        assert_eq!(comment(&"long ".repeat(500)), Ok(()));
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::Required.to_string(), "Required");
        assert_eq!(ValidationError::TooShort.to_string(), "Too Short!");
        assert_eq!(ValidationError::TypeRequired.to_string(), "Type is required");
    }
}
