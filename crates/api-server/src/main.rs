use api_server::{router, AppState};
use application::MovieApp;
use config::Config;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let config = Config::from_env(None)?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    info!("🚀 Starting Movie Catalog API Server");
    info!("💾 Using database: {}", config.database_url);

    let movie_app = Arc::new(MovieApp::new(&config.database_url)?);
    if config.seed_on_startup {
        movie_app.seed_database().await;
    }

    let app = router(AppState::new(movie_app, config.environment.clone()));

    let bind_address = config.api_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("🌐 API Server listening on http://{}", bind_address);
    info!("📖 API Documentation:");
    info!("   GET    /api/v1/movies      - List all movies");
    info!("   POST   /api/v1/movies      - Create a movie");
    info!("   GET    /api/v1/movies/:id  - Get movie details");
    info!("   PUT    /api/v1/movies/:id  - Update a movie");
    info!("   DELETE /api/v1/movies/:id  - Delete a movie");
    info!("   GET    /api/status         - System status");
    info!("   GET    /health             - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
