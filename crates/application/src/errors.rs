use domain::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// Invariant violations and repository failures passed through unchanged.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The movie still exists but another writer changed it first.
    #[error("{message}")]
    ConcurrencyConflict {
        message: String,
        #[source]
        source: DomainError,
    },

    #[error("{message}")]
    Unexpected {
        message: String,
        #[source]
        source: DomainError,
    },
}

impl ServiceError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Domain(e) if e.is_validation())
    }
}
