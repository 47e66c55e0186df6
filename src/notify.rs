use serde::{Deserialize, Serialize};

use crate::submit::SubmissionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn title(self) -> &'static str {
        match self {
            NotificationKind::Success => "All good!",
            NotificationKind::Error => "Oops!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// The single visible notification slot, shared across the page. It also
/// hands out submission ids so they never repeat while the page is alive,
/// even when the contact form is remounted.
#[derive(Debug, Clone, Default)]
pub struct AlertCenter {
    current: Option<Notification>,
    last_delivered: Option<SubmissionId>,
    last_issued: u64,
}

impl AlertCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn next_submission_id(&mut self) -> SubmissionId {
        self.last_issued += 1;
        SubmissionId(self.last_issued)
    }

    /// Show a notification, replacing whatever is on screen.
    pub fn open(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.current = Some(Notification {
            kind,
            message: message.into(),
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Show the notification for a submission unless that submission (or a
    /// later one) was already delivered. Returns whether it was shown.
    pub fn deliver(&mut self, id: SubmissionId, notification: Notification) -> bool {
        if self.last_delivered.is_some_and(|last| id <= last) {
            log::debug!("notification for {id:?} already delivered");
            return false;
        }
        self.last_delivered = Some(id);
        self.open(notification.kind, notification.message);
        true
    }
}
