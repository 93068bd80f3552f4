use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use domain::DomainError;
use tracing::{debug, info};

pub mod schema;
pub use schema::*;

pub type SqlitePool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a pooled SQLite database.
    ///
    /// In-memory databases live and die with their connection, so they get a
    /// single connection that the pool never recycles.
    pub fn connect(database_url: &str) -> Result<Self, DomainError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);

        let builder = if is_in_memory(database_url) {
            SqlitePool::builder()
                .max_size(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePool::builder()
        };

        let pool = builder.build(manager).map_err(|e| {
            DomainError::RepositoryError(format!("Failed to create SQLite connection pool: {}", e))
        })?;

        debug!(database_url, "SQLite connection pool ready");
        Ok(Database { pool })
    }

    /// Apply every pending embedded migration. Returns how many were applied.
    pub fn run_migrations(&self) -> Result<usize, DomainError> {
        let mut pooled = self
            .pool
            .get()
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;
        let conn: &mut SqliteConnection = &mut pooled;

        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DomainError::RepositoryError(format!("Migration failed: {}", e)))?;

        for version in &applied {
            info!(%version, "Applied migration");
        }

        Ok(applied.len())
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url == ":memory:"
        || database_url.starts_with("file::memory:")
        || database_url.contains("mode=memory")
}
