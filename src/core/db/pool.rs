//! PostgreSQL pool setup for the waitlist store

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;

use crate::core::config::Config;

/// Connections kept warm; a landing page sees bursty, light traffic
const MIN_CONNECTIONS: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
    /// How long a handler may wait for a free connection
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
}

impl DbConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(600),
        }
    }

    /// Pool settings for the configured database, or `None` when signups
    /// should stay in memory
    pub fn from_config(config: &Config) -> Option<Self> {
        let url = config.database_url.as_deref()?;
        Some(Self::new(url).max_connections(config.max_connections))
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max.max(1);
        self
    }

    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(MIN_CONNECTIONS.min(self.max_connections))
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Failed to connect to database: {0}")]
    ConnectionError(#[from] sqlx::Error),

    #[error("Failed to run migrations: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}

pub async fn create_pool(config: &DbConfig) -> Result<PgPool, DbError> {
    let pool = config.pool_options().connect(&config.database_url).await?;
    tracing::info!(
        "Connected to PostgreSQL (max {} connections)",
        config.max_connections
    );
    Ok(pool)
}

/// Connect, then apply the embedded `waitlist` and `analytics_events` schema
pub async fn create_pool_with_migrations(config: &DbConfig) -> Result<PgPool, DbError> {
    let pool = create_pool(config).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Waitlist migrations applied");
    Ok(())
}

/// Round-trip a trivial query so a bad URL fails at startup rather than on
/// the first signup
pub async fn health_check(pool: &PgPool) -> Result<(), DbError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
