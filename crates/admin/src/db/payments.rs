//! Payment database operations.

use sqlx::PgPool;

use cardshop_core::PaymentId;

use super::RepositoryError;
use super::query::Table;
use crate::models::{NewPayment, Payment};

/// The `payments` table.
pub static PAYMENTS: Table = Table {
    name: "payments",
    key: "payment_id",
    columns: &[
        "payment_id",
        "order_id",
        "payment_number",
        "payment_method",
        "amount",
        "payment_date",
    ],
    order_by: &["payment_id"],
};

/// Repository for payment database operations.
pub struct PaymentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PaymentRepository<'a> {
    /// Create a new payment repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every payment by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Payment>, RepositoryError> {
        let payments = sqlx::query_as::<_, Payment>(&PAYMENTS.select_all())
            .fetch_all(self.pool)
            .await?;
        Ok(payments)
    }

    /// Insert a payment and return its new ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &NewPayment) -> Result<PaymentId, RepositoryError> {
        PAYMENTS
            .write()
            .set("order_id", input.order_id)?
            .set("payment_number", input.payment_number.as_str())?
            .set("payment_method", input.payment_method.as_str())?
            .set("amount", input.amount)?
            .set("payment_date", input.payment_date)?
            .insert(self.pool)
            .await
    }
}
