use crate::database::{movies, SqlitePool};
use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use domain::{DomainError, Movie, MovieRepository};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use tracing::{debug, warn};

// Database model - separate from domain entity
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = movies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct MovieModel {
    id: i32,
    title: String,
    release_date: NaiveDate,
    genre: String,
    price: String,
    row_version: i32,
}

#[derive(Insertable)]
#[diesel(table_name = movies)]
struct NewMovieModel {
    title: String,
    release_date: NaiveDate,
    genre: String,
    price: String,
    row_version: i32,
}

// Convert between domain and database models
impl TryFrom<MovieModel> for Movie {
    type Error = DomainError;

    fn try_from(model: MovieModel) -> Result<Self, Self::Error> {
        let id = model.id;
        let price = Decimal::from_str(&model.price).map_err(|e| {
            DomainError::RepositoryError(format!(
                "Invalid price '{}' stored for movie {}: {}",
                model.price, id, e
            ))
        })?;

        Movie::with_id(
            id,
            model.title,
            model.release_date,
            model.genre,
            price,
            model.row_version,
        )
        .map_err(|e| DomainError::RepositoryError(format!("Stored movie {} is invalid: {}", id, e)))
    }
}

impl From<&Movie> for NewMovieModel {
    fn from(movie: &Movie) -> Self {
        NewMovieModel {
            title: movie.title().to_string(),
            release_date: movie.release_date(),
            genre: movie.genre().to_string(),
            price: storage_price(movie.price()),
            row_version: 0,
        }
    }
}

/// Prices are stored like a decimal(18,2) column: rounded to cents, always two places.
fn storage_price(price: Decimal) -> String {
    let mut cents = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cents.rescale(2);
    cents.to_string()
}

pub struct SqliteMovieRepository {
    pool: SqlitePool,
}

impl SqliteMovieRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Run a blocking Diesel query on a pooled connection off the async runtime.
    async fn run<T, F>(&self, query: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| DomainError::RepositoryError(e.to_string()))?;
            query(&mut conn).map_err(|e| DomainError::RepositoryError(e.to_string()))
        })
        .await
        .map_err(|e| DomainError::RepositoryError(e.to_string()))?
    }
}

#[async_trait]
impl MovieRepository for SqliteMovieRepository {
    async fn add(&self, movie: &Movie) -> Result<Movie, DomainError> {
        let new_movie = NewMovieModel::from(movie);

        let model = self
            .run(move |conn| {
                diesel::insert_into(movies::table)
                    .values(&new_movie)
                    .returning(MovieModel::as_returning())
                    .get_result(conn)
            })
            .await?;

        debug!(id = model.id, "Inserted movie row");
        model.try_into()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, DomainError> {
        let result = self
            .run(move |conn| {
                movies::table
                    .filter(movies::id.eq(id))
                    .select(MovieModel::as_select())
                    .first::<MovieModel>(conn)
                    .optional()
            })
            .await?;

        result.map(Movie::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Movie>, DomainError> {
        let result = self
            .run(|conn| {
                movies::table
                    .order(movies::id.asc())
                    .select(MovieModel::as_select())
                    .load::<MovieModel>(conn)
            })
            .await?;

        result.into_iter().map(Movie::try_from).collect()
    }

    async fn exists(&self, id: i32) -> Result<bool, DomainError> {
        self.run(move |conn| {
            diesel::select(diesel::dsl::exists(movies::table.filter(movies::id.eq(id))))
                .get_result::<bool>(conn)
        })
        .await
    }

    async fn update(&self, movie: &Movie) -> Result<Movie, DomainError> {
        let movie_id = movie.id().ok_or_else(|| {
            DomainError::invalid_argument("id", "Movie ID is required for updates")
        })?;

        let expected_version = movie.row_version();
        let title = movie.title().to_string();
        let release_date = movie.release_date();
        let genre = movie.genre().to_string();
        let price = storage_price(movie.price());

        let result = self
            .run(move |conn| {
                diesel::update(
                    movies::table
                        .filter(movies::id.eq(movie_id))
                        .filter(movies::row_version.eq(expected_version)),
                )
                .set((
                    movies::title.eq(title),
                    movies::release_date.eq(release_date),
                    movies::genre.eq(genre),
                    movies::price.eq(price),
                    movies::row_version.eq(expected_version + 1),
                ))
                .returning(MovieModel::as_returning())
                .get_result::<MovieModel>(conn)
                .optional()
            })
            .await?;

        match result {
            Some(model) => model.try_into(),
            None => {
                warn!(
                    id = movie_id,
                    expected_version, "Movie row changed or vanished before update"
                );
                Err(DomainError::ConcurrencyConflict(format!(
                    "Movie {} no longer matches row version {}",
                    movie_id, expected_version
                )))
            }
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let affected = self
            .run(move |conn| diesel::delete(movies::table.filter(movies::id.eq(id))).execute(conn))
            .await?;

        Ok(affected > 0)
    }
}
