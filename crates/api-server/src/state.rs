use application::MovieApp;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub movie_app: Arc<MovieApp>,
    pub environment: String,
}

impl AppState {
    pub fn new(movie_app: Arc<MovieApp>, environment: impl Into<String>) -> Self {
        Self {
            movie_app,
            environment: environment.into(),
        }
    }
}
