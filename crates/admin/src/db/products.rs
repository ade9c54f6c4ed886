//! Product database operations.

use sqlx::PgPool;

use cardshop_core::ProductId;

use super::RepositoryError;
use super::query::Table;
use crate::models::{NewProduct, Product, ProductOption};

/// The `products` table.
pub static PRODUCTS: Table = Table {
    name: "products",
    key: "product_id",
    columns: &[
        "product_id",
        "product_type",
        "set_id",
        "name",
        "card_condition",
        "sku",
        "price",
        "quantity",
    ],
    order_by: &["product_id"],
};

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&PRODUCTS.select_all())
            .fetch_all(self.pool)
            .await?;
        Ok(products)
    }

    /// Product id + name projection, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn lookup(&self) -> Result<Vec<ProductOption>, RepositoryError> {
        let options = sqlx::query_as::<_, ProductOption>(&PRODUCTS.select_projection(&["name"]))
            .fetch_all(self.pool)
            .await?;
        Ok(options)
    }

    /// Insert a product and return its new ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including a
    /// duplicate SKU or unknown set).
    pub async fn create(&self, input: &NewProduct) -> Result<ProductId, RepositoryError> {
        PRODUCTS
            .write()
            .set("product_type", input.product_type.as_str())?
            .set("set_id", input.set_id)?
            .set("name", input.name.as_str())?
            .set("card_condition", input.card_condition.as_deref())?
            .set("sku", input.sku.as_str())?
            .set("price", input.price)?
            .set("quantity", input.quantity)?
            .insert(self.pool)
            .await
    }
}
