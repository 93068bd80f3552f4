pub mod error;
pub mod handlers;
pub mod state;

use axum::routing::get;
use axum::Router;
use handlers::{health, movies};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

/// Versioned movie routes, mounted under `/api/v1`.
fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movies::list_movies).post(movies::create_movie))
        .route(
            "/movies/:id",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", movie_routes())
        // System info endpoints
        .route("/api/status", get(health::get_system_status))
        .route("/health", get(health::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
