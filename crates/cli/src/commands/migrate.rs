//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! cardshop-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `CARDSHOP_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string
//!
//! # Migration Files
//!
//! Migrations live in `crates/admin/migrations/` and are embedded at build
//! time.

use thiserror::Error;

use cardshop_admin::config::{AdminConfig, ConfigError};
use cardshop_admin::db;

/// Errors that can occur while migrating.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run every pending migration against the configured database.
///
/// # Errors
///
/// Returns `MigrationError` if the configuration is incomplete, the
/// database is unreachable, or a migration fails.
pub async fn run() -> Result<(), MigrationError> {
    let config = AdminConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url, config.pool).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../admin/migrations").run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
