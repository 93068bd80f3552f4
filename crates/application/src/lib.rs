pub mod dto;
pub mod errors;
pub mod services;

pub use dto::MovieDto;
pub use errors::ServiceError;
pub use services::*;

use domain::{DomainError, MovieRepository};
use infrastructure::{Database, SqliteMovieRepository};
use std::sync::Arc;
use tracing::{error, info};

/// Movie catalog application - wires storage to the use cases
pub struct MovieApp {
    pub movie_service: MovieService,
    pub seed_service: MovieSeedService,
}

impl MovieApp {
    /// Open the database, apply pending migrations and build the services.
    pub fn new(database_url: &str) -> Result<Self, DomainError> {
        // Infrastructure layer - database setup
        let database = Database::connect(database_url)?;
        let applied = database.run_migrations()?;
        info!(database_url, applied, "Database ready");

        let movie_repository: Arc<dyn MovieRepository> =
            Arc::new(SqliteMovieRepository::new(database.get_pool().clone()));

        Ok(Self::with_repository(movie_repository))
    }

    pub fn with_repository(movie_repository: Arc<dyn MovieRepository>) -> Self {
        Self {
            movie_service: MovieService::new(movie_repository.clone()),
            seed_service: MovieSeedService::new(movie_repository),
        }
    }

    /// Seed sample data. Failures are logged, never fatal to startup.
    pub async fn seed_database(&self) -> Option<SeedReport> {
        match self.seed_service.seed().await {
            Ok(report) => Some(report),
            Err(e) => {
                error!(error = %e, "Failed to seed the database");
                None
            }
        }
    }
}
