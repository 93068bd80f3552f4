use application::{MovieApp, SeedReport};
use config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Prepare the catalog database: apply migrations, seed it when empty, and
/// print what it holds.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_path = std::env::args().nth(1);
    let config = Config::from_env(env_path.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    println!("🎬 Movie Catalog maintenance");
    println!("  🗄️  Database: {}", config.database_url);

    // Migrations run as part of opening the app
    let app = MovieApp::new(&config.database_url)?;

    match app.seed_service.seed().await? {
        SeedReport::Seeded(count) => println!("  🌱 Seeded {} movies", count),
        SeedReport::AlreadySeeded => println!("  ✅ Catalog already populated"),
    }

    let movies = app.movie_service.get_all().await?;
    info!(count = movies.len(), "Catalog loaded");

    println!();
    println!("📊 Current catalog:");
    for movie in movies {
        println!(
            "   • #{} {} ({}) - {} - {}",
            movie.id, movie.title, movie.release_date, movie.genre, movie.price
        );
    }

    Ok(())
}
