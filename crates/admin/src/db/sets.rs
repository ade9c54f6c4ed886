//! Card set database operations.

use sqlx::PgPool;

use cardshop_core::SetId;

use super::RepositoryError;
use super::query::Table;
use crate::models::{CardSet, NewCardSet, SetOption};

/// The `sets` table.
pub static SETS: Table = Table {
    name: "sets",
    key: "set_id",
    columns: &["set_id", "name", "description", "release_date"],
    order_by: &["set_id"],
};

/// Repository for card set database operations.
pub struct SetRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SetRepository<'a> {
    /// Create a new set repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every set by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<CardSet>, RepositoryError> {
        let sets = sqlx::query_as::<_, CardSet>(&SETS.select_all())
            .fetch_all(self.pool)
            .await?;
        Ok(sets)
    }

    /// Set id + name projection, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn lookup(&self) -> Result<Vec<SetOption>, RepositoryError> {
        let options = sqlx::query_as::<_, SetOption>(&SETS.select_projection(&["name"]))
            .fetch_all(self.pool)
            .await?;
        Ok(options)
    }

    /// Insert a set and return its new ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &NewCardSet) -> Result<SetId, RepositoryError> {
        SETS.write()
            .set("name", input.name.as_str())?
            .set("description", input.description.as_deref())?
            .set("release_date", input.release_date)?
            .insert(self.pool)
            .await
    }
}
