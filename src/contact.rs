pub mod validate;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::notify::{AlertCenter, Notification};
use crate::submit::{ResponseKind, SubmissionId, SubmissionOutcome};
pub use validate::ValidationError;

pub const FAULT_MESSAGE: &str = "An error occurred while submitting the form.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    Email,
    Enquiry,
    Comment,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::FirstName, Field::Email, Field::Enquiry, Field::Comment];

    /// Form control name, matching the JSON field names.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::Email => "email",
            Field::Enquiry => "type",
            Field::Comment => "comment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnquiryType {
    HireMe,
    OpenSource,
    Other,
}

impl EnquiryType {
    pub const ALL: [EnquiryType; 3] = [
        EnquiryType::HireMe,
        EnquiryType::OpenSource,
        EnquiryType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EnquiryType::HireMe => "hireMe",
            EnquiryType::OpenSource => "openSource",
            EnquiryType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EnquiryType::HireMe => "Freelance project proposal",
            EnquiryType::OpenSource => "Open source consultancy session",
            EnquiryType::Other => "Other",
        }
    }
}

impl fmt::Display for EnquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnquiryType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnquiryType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or(ValidationError::TypeRequired)
    }
}

/// Raw input values, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub first_name: String,
    pub email: String,
    pub enquiry: String,
    pub comment: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::Email => &self.email,
            Field::Enquiry => &self.enquiry,
            Field::Comment => &self.comment,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::Email => &mut self.email,
            Field::Enquiry => &mut self.enquiry,
            Field::Comment => &mut self.comment,
        }
    }
}

/// A validated contact request, as handed to the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub first_name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub enquiry: EnquiryType,
    pub comment: String,
}

pub fn validate_field(values: &FormValues, field: Field) -> Result<(), ValidationError> {
    let value = values.get(field);
    match field {
        Field::FirstName => validate::first_name(value),
        Field::Email => validate::email(value),
        Field::Enquiry => validate::enquiry(value).map(|_| ()),
        Field::Comment => validate::comment(value),
    }
}

/// Run every field rule. Either a typed request or all field errors.
pub fn validate_all(values: &FormValues) -> Result<ContactRequest, HashMap<Field, ValidationError>> {
    let errors = Field::ALL
        .into_iter()
        .filter_map(|f| validate_field(values, f).err().map(|e| (f, e)))
        .collect::<HashMap<_, _>>();
    if !errors.is_empty() {
        return Err(errors);
    }
    let enquiry = validate::enquiry(&values.enquiry).map_err(|e| HashMap::from([(Field::Enquiry, e)]))?;
    Ok(ContactRequest {
        first_name: values.first_name.clone(),
        email: values.email.clone(),
        enquiry,
        comment: values.comment.clone(),
    })
}

impl ContactRequest {
    /// Server side re-check of a request that arrived over the wire.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::first_name(&self.first_name)?;
        validate::email(&self.email)?;
        validate::comment(&self.comment)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Handed out by [`ContactFormState::begin_submit`] once the form is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub id: SubmissionId,
    pub request: ContactRequest,
}

#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    values: FormValues,
    touched: HashSet<Field>,
    errors: HashMap<Field, ValidationError>,
    status: SubmissionStatus,
    in_flight: Option<SubmissionId>,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    /// The error to show next to a field. Untouched fields never show one.
    pub fn visible_error(&self, field: Field) -> Option<ValidationError> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    fn revalidate(&mut self, field: Field) {
        match validate_field(&self.values, field) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(e) => {
                self.errors.insert(field, e);
            }
        }
    }

    /// Keystroke: store and re-check the value without marking it touched.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.values.slot(field) = value.into();
        self.revalidate(field);
    }

    pub fn blur_field(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    /// Validate the whole form. On failure every field is marked touched so
    /// all errors show and no ticket is issued. `next_id` is only called for
    /// a valid form.
    pub fn begin_submit(
        &mut self,
        next_id: impl FnOnce() -> SubmissionId,
    ) -> Option<SubmissionTicket> {
        match validate_all(&self.values) {
            Err(errors) => {
                log::debug!("contact form invalid, {} field errors", errors.len());
                self.errors = errors;
                self.touched.extend(Field::ALL);
                None
            }
            Ok(request) => {
                self.errors.clear();
                let id = next_id();
                self.in_flight = Some(id);
                self.status = SubmissionStatus::Submitting;
                Some(SubmissionTicket { id, request })
            }
        }
    }

    /// Apply a submission outcome. Each in-flight id is applied once; repeat
    /// or stale deliveries return `None` and change nothing.
    pub fn resolve(&mut self, outcome: &SubmissionOutcome) -> Option<Notification> {
        if self.in_flight != Some(outcome.id) {
            log::debug!("ignoring outcome for {:?}, not in flight", outcome.id);
            return None;
        }
        self.in_flight = None;
        let notification = match &outcome.result {
            Ok(res) if res.kind == ResponseKind::Success => {
                self.reset();
                self.status = SubmissionStatus::Succeeded;
                Notification::success(format!(
                    "Form submitted successfully! First Name: {}",
                    outcome.first_name
                ))
            }
            Ok(res) => {
                self.status = SubmissionStatus::Failed;
                Notification::error(res.message.clone())
            }
            Err(e) => {
                log::warn!("contact submission failed: {e}");
                self.status = SubmissionStatus::Failed;
                Notification::error(FAULT_MESSAGE)
            }
        };
        Some(notification)
    }

    fn reset(&mut self) {
        self.values = FormValues::default();
        self.touched.clear();
        self.errors.clear();
    }
}

/// Route an outcome from either delivery path to the form and the alert slot.
/// Returns whether a notification was shown.
pub fn settle(
    form: &mut ContactFormState,
    alerts: &mut AlertCenter,
    outcome: &SubmissionOutcome,
) -> bool {
    match form.resolve(outcome) {
        Some(note) => alerts.deliver(outcome.id, note),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationKind;
    use crate::submit::{SubmitError, SubmitResponse};

    fn fill(state: &mut ContactFormState, name: &str, email: &str, kind: &str, comment: &str) {
        state.update_field(Field::FirstName, name);
        state.update_field(Field::Email, email);
        state.update_field(Field::Enquiry, kind);
        state.update_field(Field::Comment, comment);
    }

    fn valid_state() -> ContactFormState {
        let mut state = ContactFormState::new();
        fill(&mut state, "Al", "a@b.com", "other", "Hello there!");
        state
    }

    fn outcome(ticket: &SubmissionTicket, result: Result<SubmitResponse, SubmitError>) -> SubmissionOutcome {
        SubmissionOutcome {
            id: ticket.id,
            first_name: ticket.request.first_name.clone(),
            result,
        }
    }

    #[test]
    fn test_new_form_is_empty_and_idle() {
        let state = ContactFormState::new();
        assert_eq!(state.values(), &FormValues::default());
        assert_eq!(state.status(), SubmissionStatus::Idle);
        for f in Field::ALL {
            assert!(!state.is_touched(f));
            assert_eq!(state.error(f), None);
        }
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut state = ContactFormState::new();
        state.update_field(Field::FirstName, "A");
        assert_eq!(state.error(Field::FirstName), Some(ValidationError::TooShort));
        assert_eq!(state.visible_error(Field::FirstName), None);

        state.blur_field(Field::FirstName);
        assert_eq!(state.visible_error(Field::FirstName), Some(ValidationError::TooShort));

        state.update_field(Field::FirstName, "Al");
        assert_eq!(state.visible_error(Field::FirstName), None);
    }

    #[test]
    fn test_blur_on_empty_field_shows_required() {
        let mut state = ContactFormState::new();
        state.blur_field(Field::Email);
        assert_eq!(state.visible_error(Field::Email), Some(ValidationError::Required));
        // other fields untouched
        assert_eq!(state.visible_error(Field::Comment), None);
    }

    #[test]
    fn test_invalid_submit_marks_all_touched() {
        let mut state = ContactFormState::new();
        let mut ids = AlertCenter::new();
        fill(&mut state, "", "a@b.com", "other", "Hello there!");
        assert!(state.begin_submit(|| ids.next_submission_id()).is_none());
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(state.visible_error(Field::FirstName), Some(ValidationError::Required));
        for f in Field::ALL {
            assert!(state.is_touched(f));
        }
        assert_eq!(state.visible_error(Field::Email), None);
    }

    #[test]
    fn test_submit_without_type_fails() {
        let mut state = ContactFormState::new();
        let mut ids = AlertCenter::new();
        fill(&mut state, "Al", "a@b.com", "", "Hello there!");
        assert!(state.begin_submit(|| ids.next_submission_id()).is_none());
        assert_eq!(state.visible_error(Field::Enquiry), Some(ValidationError::TypeRequired));
    }

    #[test]
    fn test_valid_submit_issues_ticket_with_exact_values() {
        let mut state = valid_state();
        let mut ids = AlertCenter::new();
        let ticket = state.begin_submit(|| ids.next_submission_id()).expect("form should be valid");
        assert_eq!(state.status(), SubmissionStatus::Submitting);
        assert_eq!(
            ticket.request,
            ContactRequest {
                first_name: "Al".to_string(),
                email: "a@b.com".to_string(),
                enquiry: EnquiryType::Other,
                comment: "Hello there!".to_string(),
            }
        );
    }

    #[test]
    fn test_tickets_get_fresh_ids() {
        let mut state = valid_state();
        let mut ids = AlertCenter::new();
        let first = state.begin_submit(|| ids.next_submission_id()).expect("valid");
        let second = state.begin_submit(|| ids.next_submission_id()).expect("valid");
        assert!(second.id > first.id);
    }

    #[test]
    fn test_success_notifies_and_resets() {
        let mut state = valid_state();
        let mut ids = AlertCenter::new();
        state.blur_field(Field::Comment);
        let ticket = state.begin_submit(|| ids.next_submission_id()).expect("valid");
        let res = SubmitResponse::success("ok");
        let note = state
            .resolve(&outcome(&ticket, Ok(res)))
            .expect("first delivery should notify");
        assert_eq!(note.kind, NotificationKind::Success);
        assert!(note.message.contains("Al"));
        assert_eq!(state.values(), &FormValues::default());
        assert!(!state.is_touched(Field::Comment));
        assert_eq!(state.status(), SubmissionStatus::Succeeded);
    }

    #[test]
    fn test_structured_error_keeps_values() {
        let mut state = valid_state();
        let mut ids = AlertCenter::new();
        let ticket = state.begin_submit(|| ids.next_submission_id()).expect("valid");
        let note = state
            .resolve(&outcome(&ticket, Ok(SubmitResponse::error("Bad request"))))
            .expect("should notify");
        assert_eq!(note, Notification::error("Bad request"));
        assert_eq!(state.value(Field::FirstName), "Al");
        assert_eq!(state.value(Field::Comment), "Hello there!");
        assert_eq!(state.status(), SubmissionStatus::Failed);
    }

    #[test]
    fn test_fault_uses_fallback_message() {
        let mut state = valid_state();
        let mut ids = AlertCenter::new();
        let ticket = state.begin_submit(|| ids.next_submission_id()).expect("valid");
        let fault = Err(SubmitError::Transport("connection reset".to_string()));
        let note = state.resolve(&outcome(&ticket, fault)).expect("should notify");
        assert_eq!(note, Notification::error(FAULT_MESSAGE));
        assert_eq!(state.value(Field::Email), "a@b.com");
    }

    #[test]
    fn test_duplicate_delivery_is_ignored() {
        let mut state = valid_state();
        let mut ids = AlertCenter::new();
        let ticket = state.begin_submit(|| ids.next_submission_id()).expect("valid");
        let done = outcome(&ticket, Ok(SubmitResponse::success("ok")));
        assert!(state.resolve(&done).is_some());

        // user starts typing again before the ambient copy arrives
        state.update_field(Field::FirstName, "Bo");
        assert!(state.resolve(&done).is_none());
        assert_eq!(state.value(Field::FirstName), "Bo");
    }

    #[test]
    fn test_stale_outcome_is_ignored() {
        let mut state = valid_state();
        let mut ids = AlertCenter::new();
        let old = state.begin_submit(|| ids.next_submission_id()).expect("valid");
        let current = state.begin_submit(|| ids.next_submission_id()).expect("valid");
        assert!(state
            .resolve(&outcome(&old, Ok(SubmitResponse::success("ok"))))
            .is_none());
        assert_eq!(state.status(), SubmissionStatus::Submitting);
        assert!(state
            .resolve(&outcome(&current, Ok(SubmitResponse::error("nope"))))
            .is_some());
    }

    #[test]
    fn test_comment_boundary() {
        let mut state = ContactFormState::new();
        state.update_field(Field::Comment, "123456789");
        assert_eq!(state.error(Field::Comment), Some(ValidationError::TooShort));
        state.update_field(Field::Comment, "1234567890");
        assert_eq!(state.error(Field::Comment), None);
    }

    #[test]
    fn test_request_wire_names() {
        let req = ContactRequest {
            first_name: "Al".to_string(),
            email: "a@b.com".to_string(),
            enquiry: EnquiryType::HireMe,
            comment: "Hello there!".to_string(),
        };
        let json = serde_json::to_value(&req).expect("should serialize");
        assert_eq!(json["firstName"], "Al");
        assert_eq!(json["type"], "hireMe");
        let back: ContactRequest = serde_json::from_value(json).expect("should deserialize");
        assert_eq!(back, req);
    }

    #[test]
    fn test_request_validate() {
        let mut req = ContactRequest {
            first_name: "Al".to_string(),
            email: "a@b.com".to_string(),
            enquiry: EnquiryType::OpenSource,
            comment: "short".to_string(),
        };
        assert_eq!(req.validate(), Err(ValidationError::TooShort));
        req.comment = "long enough now".to_string();
        assert_eq!(req.validate(), Ok(()));
    }

    #[test]
    fn test_remounted_form_still_notifies() {
        let mut alerts = AlertCenter::new();

        let mut first = valid_state();
        let t1 = first.begin_submit(|| alerts.next_submission_id()).expect("valid");
        assert!(settle(&mut first, &mut alerts, &outcome(&t1, Ok(SubmitResponse::success("ok")))));
        alerts.dismiss();

        // a fresh form after remount shares the page-wide alert slot
        let mut second = valid_state();
        let t2 = second.begin_submit(|| alerts.next_submission_id()).expect("valid");
        assert_ne!(t2.id, t1.id);
        assert!(settle(&mut second, &mut alerts, &outcome(&t2, Ok(SubmitResponse::error("Bad request")))));
        assert_eq!(alerts.current(), Some(&Notification::error("Bad request")));
    }

    #[test]
    fn test_settle_from_published_outcome_only() {
        let mut alerts = AlertCenter::new();
        let mut state = valid_state();
        let ticket = state.begin_submit(|| alerts.next_submission_id()).expect("valid");

        // the direct path never ran; the published copy is all that arrives
        let published = outcome(&ticket, Ok(SubmitResponse::success("ok")));
        assert!(settle(&mut state, &mut alerts, &published));
        assert_eq!(state.status(), SubmissionStatus::Succeeded);
        assert_eq!(state.values(), &FormValues::default());
        let note = alerts.current().expect("notification should be open");
        assert_eq!(note.kind, NotificationKind::Success);
        assert!(note.message.contains("Al"));
    }

    #[test]
    fn test_settle_both_paths_notifies_once() {
        let mut alerts = AlertCenter::new();
        let mut state = valid_state();
        let ticket = state.begin_submit(|| alerts.next_submission_id()).expect("valid");
        let done = outcome(&ticket, Ok(SubmitResponse::error("Bad request")));

        assert!(settle(&mut state, &mut alerts, &done));
        alerts.dismiss();
        assert!(!settle(&mut state, &mut alerts, &done));
        assert!(!alerts.is_open());
    }
}
