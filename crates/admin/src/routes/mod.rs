//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (database ping)
//!
//! GET  /                       - Home
//! GET  /home                   - Home
//!
//! # Customers
//! GET  /customers              - Customer listing
//! GET  /customers/new          - Creation form
//! POST /customers              - Create customer
//! GET  /customers/{id}/edit    - Edit form
//! POST /customers/{id}         - Update customer
//!
//! # Read-only listings
//! GET  /orders                 - Orders + customer lookup
//! GET  /orderItems             - Order items + order and product lookups
//! GET  /products               - Products + set lookup
//! GET  /sets                   - Card sets
//! GET  /payments               - Payments + order lookup
//! ```

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use askama::Template;
use axum::{
    Router,
    response::Html,
    routing::get,
};

use crate::error::AppError;
use crate::state::AppState;

pub mod customers;
pub mod health;
pub mod home;
pub mod order_items;
pub mod orders;
pub mod payments;
pub mod products;
pub mod sets;

/// Build the page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/home", get(home::index))
        .route("/customers", get(customers::index).post(customers::create))
        .route("/customers/new", get(customers::new_customer))
        .route("/customers/{id}/edit", get(customers::edit))
        .route("/customers/{id}", axum::routing::post(customers::update))
        .route("/orders", get(orders::index))
        .route("/orderItems", get(order_items::index))
        .route("/products", get(products::index))
        .route("/sets", get(sets::index))
        .route("/payments", get(payments::index))
}

/// Render a template into an HTML response.
pub(crate) fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}

/// Display names keyed by id, built from a lookup projection.
///
/// Used to show a name instead of a bare foreign key in list tables. A key
/// with no entry (a dangling reference) renders as `#<id>`.
#[derive(Debug)]
pub(crate) struct Labels<K>(HashMap<K, String>);

impl<K> Labels<K>
where
    K: Eq + Hash + Display + Copy,
{
    pub(crate) fn new(entries: impl IntoIterator<Item = (K, String)>) -> Self {
        Self(entries.into_iter().collect())
    }

    pub(crate) fn get(&self, key: K) -> String {
        self.0
            .get(&key)
            .cloned()
            .unwrap_or_else(|| format!("#{key}"))
    }
}

#[cfg(test)]
mod tests {
    use cardshop_core::OrderId;

    use super::*;

    #[test]
    fn test_labels_resolve_known_and_dangling_keys() {
        let labels = Labels::new([(OrderId::new(1), "ORD-1".to_string())]);
        assert_eq!(labels.get(OrderId::new(1)), "ORD-1");
        assert_eq!(labels.get(OrderId::new(9)), "#9");
    }
}
