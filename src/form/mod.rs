//! Form domain layer
//!
//! Row records, the ordered row store, per-row validation, and the submit
//! pipeline that turns the rows into a JSON payload. Nothing in here touches the
//! terminal; notifications leave through the [`Notifier`] trait.

mod error;
mod notify;
mod record;
mod session;
mod store;
mod submission;
mod validator;

pub use error::FormError;
pub use notify::{Notification, NotificationKind, Notifier};
pub use record::{FileRef, Gender, Qualification, RowRecord, TextField};
pub use session::FormSession;
pub use submission::Submission;

#[cfg(test)]
pub use notify::NotificationEvent;
#[cfg(test)]
pub use submission::SubmittedRow;
#[cfg(test)]
pub use validator::validate;
