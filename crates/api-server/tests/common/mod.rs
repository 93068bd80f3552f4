#![allow(dead_code)]

use api_server::{router, AppState};
use application::MovieApp;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use domain::{DomainError, Movie, MovieRepository};
use http_body_util::BodyExt;
use infrastructure::{Database, SqliteMovieRepository};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Router over a fresh in-memory catalog.
pub fn build_test_app() -> Router {
    let movie_app = MovieApp::new(":memory:").expect("in-memory catalog");
    router(AppState::new(Arc::new(movie_app), "test"))
}

/// Router whose storage can be disturbed between a read and the next update.
pub fn build_disturbed_app() -> (Router, Arc<DisturbedRepository>) {
    let database = Database::connect(":memory:").expect("in-memory database");
    database.run_migrations().expect("migrations");

    let repository = Arc::new(DisturbedRepository::new(SqliteMovieRepository::new(
        database.get_pool().clone(),
    )));
    let movie_app = MovieApp::with_repository(repository.clone());

    (router(AppState::new(Arc::new(movie_app), "test")), repository)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn matrix() -> Value {
    json!({
        "title": "The Matrix",
        "release_date": "1999-03-31",
        "genre": "Sci-Fi",
        "price": "20.00"
    })
}

/// What happens to storage right before the next `update`.
#[derive(Debug, Clone, Copy)]
pub enum Disturbance {
    ConcurrentEdit,
    StorageFailure,
}

pub struct DisturbedRepository {
    inner: SqliteMovieRepository,
    pending: Mutex<Option<Disturbance>>,
}

impl DisturbedRepository {
    fn new(inner: SqliteMovieRepository) -> Self {
        Self {
            inner,
            pending: Mutex::new(None),
        }
    }

    pub fn disturb(&self, disturbance: Disturbance) {
        *self.pending.lock().unwrap() = Some(disturbance);
    }
}

#[async_trait]
impl MovieRepository for DisturbedRepository {
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
        let pending = self.pending.lock().unwrap().take();

        match pending {
            Some(Disturbance::ConcurrentEdit) => {
                // another client saves first, bumping the row version
                self.inner.update(movie).await?;
            }
            Some(Disturbance::StorageFailure) => {
                return Err(DomainError::RepositoryError(
                    "database is locked: /var/lib/movies.db".to_string(),
                ));
            }
            None => {}
        }

        self.inner.update(movie).await
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        self.inner.delete(id).await
    }
}
