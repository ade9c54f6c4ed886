//! Order database operations.

use sqlx::PgPool;

use cardshop_core::OrderId;

use super::RepositoryError;
use super::query::Table;
use crate::models::{NewOrder, Order, OrderOption};

/// The `orders` table.
pub static ORDERS: Table = Table {
    name: "orders",
    key: "order_id",
    columns: &[
        "order_id",
        "customer_id",
        "order_number",
        "order_date",
        "order_status",
        "grand_total",
    ],
    order_by: &["order_id"],
};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every order by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(&ORDERS.select_all())
            .fetch_all(self.pool)
            .await?;
        Ok(orders)
    }

    /// Order id + order number projection, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn lookup(&self) -> Result<Vec<OrderOption>, RepositoryError> {
        let options = sqlx::query_as::<_, OrderOption>(&ORDERS.select_projection(&["order_number"]))
            .fetch_all(self.pool)
            .await?;
        Ok(options)
    }

    /// Insert an order and return its new ID.
    ///
    /// The order's line items are not written here; callers insert them
    /// separately through `OrderItemRepository`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &NewOrder) -> Result<OrderId, RepositoryError> {
        ORDERS
            .write()
            .set("customer_id", input.customer_id)?
            .set("order_number", input.order_number.as_str())?
            .set("order_date", input.order_date)?
            .set("order_status", input.order_status.as_str())?
            .set("grand_total", input.grand_total)?
            .insert(self.pool)
            .await
    }
}
