use crate::dto::MovieDto;
use crate::errors::ServiceError;
use domain::{DomainError, MovieRepository};
use std::sync::Arc;
use tracing::{error, info, warn};

const CONFLICT_MESSAGE: &str =
    "The movie was modified by another user. Please review your changes and try again.";
const UNEXPECTED_UPDATE_MESSAGE: &str = "An unexpected error occurred while updating the movie.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    /// No movie with that id, either up front or deleted while the update ran.
    NotFound,
}

impl UpdateOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, UpdateOutcome::Updated)
    }
}

/// Movie use cases. Speaks `MovieDto` at the boundary and `Movie` internally.
pub struct MovieService {
    movie_repository: Arc<dyn MovieRepository>,
}

impl MovieService {
    pub fn new(movie_repository: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repository }
    }

    /// Create a movie. The id on the input is ignored.
    pub async fn create(&self, movie_dto: MovieDto) -> Result<MovieDto, ServiceError> {
        let movie = movie_dto.to_entity()?;
        let saved = self.movie_repository.add(&movie).await?;

        info!(id = ?saved.id(), title = saved.title(), "Created movie");
        Ok(saved.into())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<MovieDto>, ServiceError> {
        let movie = self.movie_repository.find_by_id(id).await?;
        Ok(movie.map(MovieDto::from))
    }

    pub async fn get_all(&self) -> Result<Vec<MovieDto>, ServiceError> {
        let movies = self.movie_repository.find_all().await?;
        Ok(movies.into_iter().map(MovieDto::from).collect())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.movie_repository.exists(id).await?)
    }

    /// Apply new details to the movie identified by `movie_dto.id`.
    ///
    /// A conflict against a movie that was deleted in the meantime resolves
    /// to `NotFound`. A conflict against a movie that still exists is
    /// returned as `ServiceError::ConcurrencyConflict`.
    pub async fn update(&self, movie_dto: MovieDto) -> Result<UpdateOutcome, ServiceError> {
        let id = movie_dto.id;

        let Some(mut movie) = self.movie_repository.find_by_id(id).await? else {
            return Ok(UpdateOutcome::NotFound);
        };

        movie.update_details(
            movie_dto.title,
            movie_dto.release_date,
            movie_dto.genre,
            movie_dto.price,
        )?;

        match self.movie_repository.update(&movie).await {
            Ok(_) => {
                info!(id, "Updated movie");
                Ok(UpdateOutcome::Updated)
            }
            Err(conflict @ DomainError::ConcurrencyConflict(_)) => {
                if !self.movie_repository.exists(id).await? {
                    info!(id, "Movie was deleted concurrently; nothing to update");
                    return Ok(UpdateOutcome::NotFound);
                }

                warn!(id, error = %conflict, "Concurrent modification detected");
                Err(ServiceError::ConcurrencyConflict {
                    message: CONFLICT_MESSAGE.to_string(),
                    source: conflict,
                })
            }
            Err(other) => {
                error!(id, error = %other, "Unexpected failure while updating movie");
                Err(ServiceError::Unexpected {
                    message: UNEXPECTED_UPDATE_MESSAGE.to_string(),
                    source: other,
                })
            }
        }
    }

    /// Returns `false` when no movie with that id existed.
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        if !self.movie_repository.exists(id).await? {
            return Ok(false);
        }

        let removed = self.movie_repository.delete(id).await?;
        if removed {
            info!(id, "Deleted movie");
        }
        Ok(removed)
    }
}
