//! Database operations for the card shop `PostgreSQL` schema.
//!
//! ## Tables
//!
//! - `customers` - Store customers
//! - `sets` - Card sets (expansions / releases)
//! - `products` - Single cards and sealed items, optionally in a set
//! - `orders` - Customer orders
//! - `order_items` - Order line items
//! - `payments` - Payments recorded against orders
//!
//! Every statement is a single parameterized read or write. Nothing here
//! opens a transaction, retries, or caches; a failure is returned to the
//! caller as-is.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p cardshop-cli -- migrate
//! ```

pub mod customers;
pub mod order_items;
pub mod orders;
pub mod payments;
pub mod products;
pub mod query;
pub mod sets;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use customers::CustomerRepository;
pub use order_items::OrderItemRepository;
pub use orders::OrderRepository;
pub use payments::PaymentRepository;
pub use products::ProductRepository;
pub use sets::SetRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx (connectivity, constraint, decode, pool timeout).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A value could not be encoded as a bind parameter.
    #[error("failed to bind {column}: {message}")]
    Bind {
        column: &'static str,
        message: String,
    },
}

/// Pool sizing for [`create_pool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolOptions {
    /// Ceiling on concurrent connections.
    pub max_connections: u32,
    /// How long a request waits for a free connection before failing.
    pub acquire_timeout: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Create the process-wide `PostgreSQL` connection pool.
///
/// The pool is built once at startup and handed to handlers through
/// `AppState`; it is never torn down explicitly.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(
    database_url: &secrecy::SecretString,
    options: PoolOptions,
) -> Result<PgPool, sqlx::Error> {
    pool_options(options)
        .connect(database_url.expose_secret())
        .await
}

/// Create a pool that does not connect until the first query.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL cannot be parsed.
pub fn create_lazy_pool(
    database_url: &secrecy::SecretString,
    options: PoolOptions,
) -> Result<PgPool, sqlx::Error> {
    pool_options(options).connect_lazy(database_url.expose_secret())
}

fn pool_options(options: PoolOptions) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(options.max_connections)
        .acquire_timeout(options.acquire_timeout)
}

/// Check that the database answers a trivial query.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn ping(pool: &PgPool) -> Result<(), RepositoryError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
