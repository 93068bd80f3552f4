use async_trait::async_trait;
use chrono::NaiveDate;
use domain::{DomainError, Movie, MovieRepository};
use infrastructure::{Database, SqliteMovieRepository};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};

use application::MovieDto;

pub fn sqlite_repository() -> Arc<SqliteMovieRepository> {
    let database = Database::connect(":memory:").expect("in-memory database");
    database.run_migrations().expect("migrations");
    Arc::new(SqliteMovieRepository::new(database.get_pool().clone()))
}

pub fn movie_dto(title: &str, price: Decimal) -> MovieDto {
    MovieDto {
        id: 0,
        title: title.to_string(),
        release_date: NaiveDate::from_ymd_opt(1999, 3, 31).unwrap(),
        genre: "Sci-Fi".to_string(),
        price,
    }
}

/// What the competing writer does right before the next `update` call.
#[derive(Debug, Clone, Copy)]
pub enum Interference {
    DeleteRow,
    ModifyRow,
    FailStorage,
}

/// Wraps a real repository and lets a second writer sneak in between the
/// service's read and its write.
pub struct InterferingRepository {
    inner: Arc<SqliteMovieRepository>,
    pending: Mutex<Option<Interference>>,
}

impl InterferingRepository {
    pub fn new(inner: Arc<SqliteMovieRepository>) -> Self {
        Self {
            inner,
            pending: Mutex::new(None),
        }
    }

    pub fn interfere(&self, interference: Interference) {
        *self.pending.lock().unwrap() = Some(interference);
    }

    fn take_pending(&self) -> Option<Interference> {
        self.pending.lock().unwrap().take()
    }
}

#[async_trait]
impl MovieRepository for InterferingRepository {
    async fn add(&self, movie: &Movie) -> Result<Movie, DomainError> {
        self.inner.add(movie).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Movie>, DomainError> {
        self.inner.find_all().await
    }

    async fn exists(&self, id: i32) -> Result<bool, DomainError> {
        self.inner.exists(id).await
    }

    async fn update(&self, movie: &Movie) -> Result<Movie, DomainError> {
        let id = movie.id().expect("persisted movie");

        match self.take_pending() {
            Some(Interference::DeleteRow) => {
                self.inner.delete(id).await?;
            }
            Some(Interference::ModifyRow) => {
                let mut current = self.inner.find_by_id(id).await?.expect("row present");
                current.update_details(
                    current.title().to_string(),
                    current.release_date(),
                    "Changed elsewhere".to_string(),
                    current.price(),
                )?;
                self.inner.update(&current).await?;
            }
            Some(Interference::FailStorage) => {
                return Err(DomainError::RepositoryError("disk I/O error".to_string()));
            }
            None => {}
        }

        self.inner.update(movie).await
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        self.inner.delete(id).await
    }
}
