use crate::entities::Movie;
use crate::errors::DomainError;
use async_trait::async_trait;

/// Persistence port for movies.
/// Implementations live in the infrastructure layer.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Persists a new movie and returns it with its storage-assigned id.
    async fn add(&self, movie: &Movie) -> Result<Movie, DomainError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, DomainError>;
    async fn find_all(&self) -> Result<Vec<Movie>, DomainError>;
    async fn exists(&self, id: i32) -> Result<bool, DomainError>;
    /// Writes the movie back if its `row_version` still matches storage.
    /// Fails with `DomainError::ConcurrencyConflict` otherwise.
    async fn update(&self, movie: &Movie) -> Result<Movie, DomainError>;
    /// Returns `true` when a row was removed.
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}
