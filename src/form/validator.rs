//! Per-row field validation

use super::record::RowRecord;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum number of characters accepted for a name
pub const MIN_NAME_LENGTH: usize = 10;

/// Loose email shape: something, `@`, something, `.`, something.
pub const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Inline validation failure for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name should be greater than 10 characters")]
    NameTooShort,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid Email")]
    EmailInvalid,
    #[error("Gender is required")]
    GenderRequired,
    #[error("Qualification is required")]
    QualificationRequired,
}

/// At most one message per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<ValidationError>,
    pub email: Option<ValidationError>,
    pub gender: Option<ValidationError>,
    pub qualification: Option<ValidationError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.gender.is_none()
            && self.qualification.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = ValidationError> + '_ {
        [self.name, self.email, self.gender, self.qualification]
            .into_iter()
            .flatten()
    }
}

/// Outcome of one validation pass over a row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    pub errors: FieldErrors,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Run every field check against a row. Never fails; always yields a verdict.
pub fn validate(record: &RowRecord) -> Verdict {
    Verdict {
        errors: FieldErrors {
            name: check_name(&record.name),
            email: check_email(&record.email),
            gender: (!record.gender.is_set()).then_some(ValidationError::GenderRequired),
            qualification: (!record.qualification.is_set())
                .then_some(ValidationError::QualificationRequired),
        },
    }
}

fn check_name(name: &str) -> Option<ValidationError> {
    if name.is_empty() {
        Some(ValidationError::NameRequired)
    } else if name.chars().count() < MIN_NAME_LENGTH {
        Some(ValidationError::NameTooShort)
    } else {
        None
    }
}

fn check_email(email: &str) -> Option<ValidationError> {
    if email.is_empty() {
        Some(ValidationError::EmailRequired)
    } else if !EMAIL_RE.is_match(email) {
        Some(ValidationError::EmailInvalid)
    } else {
        None
    }
}
