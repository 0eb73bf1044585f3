//! Notification seam between the form core and the presentation layer

use std::time::Duration;

/// How long a notification stays on screen unless configured otherwise
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// User-visible events raised by form operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationEvent {
    RowAdded,
    RowRemoved,
    SubmitBlocked,
    SubmitSucceeded,
}

impl NotificationEvent {
    pub fn message(&self) -> &'static str {
        match self {
            Self::RowAdded => "New row added successfully!",
            Self::RowRemoved => "Row removed successfully!",
            Self::SubmitBlocked => "Please fill at least one row before submitting!",
            Self::SubmitSucceeded => "Form submitted successfully!",
        }
    }

    pub fn kind(&self) -> NotificationKind {
        match self {
            Self::SubmitBlocked => NotificationKind::Error,
            _ => NotificationKind::Success,
        }
    }
}

/// A message handed to the notification layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub event: NotificationEvent,
    pub kind: NotificationKind,
    pub message: String,
    pub duration: Duration,
}

impl From<NotificationEvent> for Notification {
    fn from(event: NotificationEvent) -> Self {
        Self {
            event,
            kind: event.kind(),
            message: event.message().to_string(),
            duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }
}

/// Receives notifications. Fire-and-forget: no acknowledgment is expected.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}
