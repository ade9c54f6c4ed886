//! Customer database operations.

use sqlx::PgPool;

use cardshop_core::CustomerId;

use super::RepositoryError;
use super::query::{Table, Write};
use crate::models::{Customer, CustomerInput, CustomerOption};

/// The `customers` table.
pub static CUSTOMERS: Table = Table {
    name: "customers",
    key: "customer_id",
    columns: &[
        "customer_id",
        "first_name",
        "last_name",
        "email",
        "phone_number",
        "address1",
        "address2",
        "city",
        "state",
        "zip_code",
    ],
    order_by: &["last_name", "first_name", "customer_id"],
};

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every customer by last name, then first name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let customers = sqlx::query_as::<_, Customer>(&CUSTOMERS.select_all())
            .fetch_all(self.pool)
            .await?;
        Ok(customers)
    }

    /// Customer id + name projection, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn lookup(&self) -> Result<Vec<CustomerOption>, RepositoryError> {
        let options = sqlx::query_as::<_, CustomerOption>(
            &CUSTOMERS.select_projection(&["first_name", "last_name"]),
        )
        .fetch_all(self.pool)
        .await?;
        Ok(options)
    }

    /// Get a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>(&CUSTOMERS.select_by_key())
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(customer)
    }

    /// Insert a customer and return its new ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including
    /// NOT NULL or length violations).
    pub async fn create(&self, input: &CustomerInput) -> Result<CustomerId, RepositoryError> {
        assignments(input)?.insert(self.pool).await
    }

    /// Overwrite every editable column of one customer.
    ///
    /// Returns the number of rows changed; zero means no customer has `id`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(&self, id: CustomerId, input: &CustomerInput) -> Result<u64, RepositoryError> {
        assignments(input)?.update(self.pool, id).await
    }
}

fn assignments(input: &CustomerInput) -> Result<Write, RepositoryError> {
    CUSTOMERS
        .write()
        .set("first_name", input.first_name.as_str())?
        .set("last_name", input.last_name.as_str())?
        .set("email", input.email.as_str())?
        .set("phone_number", input.phone_number.as_str())?
        .set("address1", input.address1.as_str())?
        .set("address2", input.address2.as_deref())?
        .set("city", input.city.as_str())?
        .set("state", input.state.as_str())?
        .set("zip_code", input.zip_code.as_str())
}
