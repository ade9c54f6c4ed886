//! Typed SQL generation for the card shop tables.
//!
//! SELECT statements come from static [`Table`] descriptors. Single-row
//! writes go through [`Write`], which records each column name alongside
//! its bound value so the generated column list and placeholder numbering
//! can never drift apart. Values are only ever bound, never formatted into
//! the SQL text.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{Arguments, Encode, PgPool, Postgres, Type};

use super::RepositoryError;

/// Static description of one table.
#[derive(Debug)]
pub struct Table {
    /// Table name.
    pub name: &'static str,
    /// Primary key column.
    pub key: &'static str,
    /// Every column, key first, in the order rows are selected.
    pub columns: &'static [&'static str],
    /// Listing order; must end in a unique column so repeated listings are stable.
    pub order_by: &'static [&'static str],
}

impl Table {
    /// `SELECT <columns> FROM <table> ORDER BY <order_by>`.
    #[must_use]
    pub fn select_all(&self) -> String {
        format!(
            "SELECT {} FROM {} ORDER BY {}",
            self.columns.join(", "),
            self.name,
            self.order_by.join(", ")
        )
    }

    /// `SELECT <columns> FROM <table> WHERE <key> = $1`.
    #[must_use]
    pub fn select_by_key(&self) -> String {
        format!(
            "SELECT {} FROM {} WHERE {} = $1",
            self.columns.join(", "),
            self.name,
            self.key
        )
    }

    /// `SELECT <key>, <columns> FROM <table> ORDER BY <key>`.
    ///
    /// Used for the id + display-name lookups that feed selection widgets.
    #[must_use]
    pub fn select_projection(&self, columns: &[&str]) -> String {
        debug_assert!(
            columns.iter().all(|c| self.columns.contains(c)),
            "projection column not in {}",
            self.name
        );
        let mut selected = Vec::with_capacity(columns.len() + 1);
        selected.push(self.key);
        selected.extend(columns.iter().copied().filter(|c| *c != self.key));
        format!(
            "SELECT {} FROM {} ORDER BY {}",
            selected.join(", "),
            self.name,
            self.key
        )
    }

    /// Start a single-row write against this table.
    #[must_use]
    pub fn write(&'static self) -> Write {
        Write {
            table: self,
            columns: Vec::with_capacity(self.columns.len()),
            arguments: PgArguments::default(),
        }
    }
}

/// Column assignments for one INSERT or UPDATE.
pub struct Write {
    table: &'static Table,
    columns: Vec<&'static str>,
    arguments: PgArguments,
}

impl Write {
    /// Assign `value` to `column`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Bind` if the value cannot be encoded.
    pub fn set<'q, T>(mut self, column: &'static str, value: T) -> Result<Self, RepositoryError>
    where
        T: Encode<'q, Postgres> + Type<Postgres> + 'q,
    {
        debug_assert!(
            self.table.columns.contains(&column) && column != self.table.key,
            "{column} is not a writable column of {}",
            self.table.name
        );
        self.arguments
            .add(value)
            .map_err(|e| RepositoryError::Bind {
                column,
                message: e.to_string(),
            })?;
        self.columns.push(column);
        Ok(self)
    }

    /// `INSERT INTO <table> (<columns>) VALUES ($1, ..) RETURNING <key>`.
    #[must_use]
    pub fn insert_sql(&self) -> String {
        let placeholders: Vec<String> = (1..=self.columns.len()).map(|i| format!("${i}")).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            self.table.name,
            self.columns.join(", "),
            placeholders.join(", "),
            self.table.key
        )
    }

    /// `UPDATE <table> SET <column> = $1, .. WHERE <key> = $n`.
    ///
    /// The key placeholder always comes after every assigned column.
    #[must_use]
    pub fn update_sql(&self) -> String {
        let assignments: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = ${}", i + 1))
            .collect();
        format!(
            "UPDATE {} SET {} WHERE {} = ${}",
            self.table.name,
            assignments.join(", "),
            self.table.key,
            self.columns.len() + 1
        )
    }

    /// Run the INSERT and return the server-assigned key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn insert<K>(self, pool: &PgPool) -> Result<K, RepositoryError>
    where
        (K,): for<'r> sqlx::FromRow<'r, PgRow>,
        K: Send + Unpin,
    {
        let sql = self.insert_sql();
        let key = sqlx::query_scalar_with::<Postgres, K, _>(&sql, self.arguments)
            .fetch_one(pool)
            .await?;
        Ok(key)
    }

    /// Run the UPDATE for the row identified by `key`.
    ///
    /// Returns the number of rows affected, which is zero when no row has
    /// that key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn update<'q, K>(mut self, pool: &PgPool, key: K) -> Result<u64, RepositoryError>
    where
        K: Encode<'q, Postgres> + Type<Postgres> + 'q,
    {
        let sql = self.update_sql();
        self.arguments
            .add(key)
            .map_err(|e| RepositoryError::Bind {
                column: self.table.key,
                message: e.to_string(),
            })?;
        let result = sqlx::query_with(&sql, self.arguments)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

impl std::fmt::Debug for Write {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Write")
            .field("table", &self.table.name)
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}
