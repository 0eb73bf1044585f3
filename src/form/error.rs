//! Form-level errors

/// Errors raised by row operations and submission
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please fill at least one row before submitting!")]
    EmptyForm,

    #[error("Row {index} does not exist (form has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("The first row cannot be removed")]
    FirstRowLocked,

    #[error("Enable Government ID on row {index} before attaching a proof")]
    ProofWithoutGovernmentId { index: usize },

    #[error("Failed to serialize submission: {0}")]
    Serialization(String),
}

pub type FormResult<T> = Result<T, FormError>;
