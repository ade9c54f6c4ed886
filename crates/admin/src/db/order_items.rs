//! Order line item database operations.

use sqlx::PgPool;

use cardshop_core::OrderItemId;

use super::RepositoryError;
use super::query::Table;
use crate::models::{NewOrderItem, OrderItem};

/// The `order_items` table.
pub static ORDER_ITEMS: Table = Table {
    name: "order_items",
    key: "order_item_id",
    columns: &[
        "order_item_id",
        "order_id",
        "product_id",
        "unit_price",
        "quantity",
        "amount",
    ],
    order_by: &["order_item_id"],
};

/// Repository for order line item database operations.
pub struct OrderItemRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderItemRepository<'a> {
    /// Create a new order item repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every order line item by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<OrderItem>, RepositoryError> {
        let items = sqlx::query_as::<_, OrderItem>(&ORDER_ITEMS.select_all())
            .fetch_all(self.pool)
            .await?;
        Ok(items)
    }

    /// Insert a line item and return its new ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including an
    /// unknown order or product).
    pub async fn create(&self, input: &NewOrderItem) -> Result<OrderItemId, RepositoryError> {
        ORDER_ITEMS
            .write()
            .set("order_id", input.order_id)?
            .set("product_id", input.product_id)?
            .set("unit_price", input.unit_price)?
            .set("quantity", input.quantity)?
            .set("amount", input.amount)?
            .insert(self.pool)
            .await
    }
}
