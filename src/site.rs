//! Static content for the page: who the site belongs to and where to find them.

use chrono::{DateTime, FixedOffset};

pub const OWNER: &str = "Pete";
pub const GREETING: &str = "Hello, I am Pete!";
pub const BIO_LINES: [&str; 2] = ["A frontend developer", "specialised in Rust and WebAssembly"];
pub const AVATAR_URL: &str = "https://i.pravatar.cc/150?img=7";

/// Built by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn build_date() -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(BUILD_TIME).ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Social {
    pub label: &'static str,
    /// Icon font class, rendered as `<i class=...>`.
    pub icon: &'static str,
    pub url: &'static str,
}

pub const SOCIALS: [Social; 5] = [
    Social {
        label: "Email",
        icon: "extra-email",
        url: "mailto:hello@example.com",
    },
    Social {
        label: "GitHub",
        icon: "devicon-github-plain",
        url: "https://github.com",
    },
    Social {
        label: "LinkedIn",
        icon: "devicon-linkedin-plain",
        url: "https://www.linkedin.com",
    },
    Social {
        label: "Medium",
        icon: "devicon-medium-original",
        url: "https://medium.com",
    },
    Social {
        label: "Stack Overflow",
        icon: "devicon-stackoverflow-plain",
        url: "https://stackoverflow.com",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Section name; the target element id is `<anchor>-section`.
    pub anchor: &'static str,
    pub text: &'static str,
}

pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        anchor: "projects",
        text: "Projects",
    },
    NavLink {
        anchor: "contactme",
        text: "Contact Me",
    },
];
