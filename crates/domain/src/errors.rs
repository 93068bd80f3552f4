use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid argument `{field}`: {message}")]
    InvalidArgument { field: &'static str, message: String },

    #[error("Argument `{field}` out of range: {message}")]
    OutOfRange { field: &'static str, message: String },

    /// Raised by a repository when the stored row changed (or vanished) since it was read.
    #[error("Concurrency conflict: {0}")]
    ConcurrencyConflict(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl DomainError {
    /// True for invariant violations the caller can fix by changing its input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidArgument { .. } | DomainError::OutOfRange { .. }
        )
    }

    pub fn invalid_argument(field: &'static str, message: impl Into<String>) -> Self {
        DomainError::InvalidArgument {
            field,
            message: message.into(),
        }
    }

    pub fn out_of_range(field: &'static str, message: impl Into<String>) -> Self {
        DomainError::OutOfRange {
            field,
            message: message.into(),
        }
    }
}
