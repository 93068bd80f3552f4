use crate::errors::ServiceError;
use chrono::NaiveDate;
use domain::{DomainError, Movie, MovieRepository};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedReport {
    /// At least one movie was already stored; nothing was inserted.
    AlreadySeeded,
    Seeded(usize),
}

/// Populates an empty catalog with sample movies.
pub struct MovieSeedService {
    movie_repository: Arc<dyn MovieRepository>,
}

impl MovieSeedService {
    pub fn new(movie_repository: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repository }
    }

    /// Insert the sample set unless any movie exists already.
    ///
    /// Each movie is its own write, so a failure part way through keeps
    /// whatever was inserted before it.
    pub async fn seed(&self) -> Result<SeedReport, ServiceError> {
        if !self.movie_repository.find_all().await?.is_empty() {
            info!("Catalog already populated, skipping seed");
            return Ok(SeedReport::AlreadySeeded);
        }

        let movies = sample_movies()?;
        for movie in &movies {
            self.movie_repository.add(movie).await?;
        }

        info!(count = movies.len(), "Seeded movie catalog");
        Ok(SeedReport::Seeded(movies.len()))
    }
}

fn sample_movies() -> Result<Vec<Movie>, DomainError> {
    Ok(vec![
        Movie::new(
            "The Terminator".to_string(),
            seed_date(1984, 10, 26)?,
            "Action".to_string(),
            Decimal::new(2500, 2),
        )?,
        Movie::new(
            "The Matrix".to_string(),
            seed_date(1999, 3, 31)?,
            "Action/Sci-Fi".to_string(),
            Decimal::new(2000, 2),
        )?,
    ])
}

fn seed_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, DomainError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        DomainError::invalid_argument("release_date", format!("{year}-{month}-{day} is not a date"))
    })
}
