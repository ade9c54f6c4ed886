//! Products list route handler.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use cardshop_core::{ProductId, SetId};

use super::{Labels, render};
use crate::{
    db::{ProductRepository, SetRepository},
    error::AppError,
    filters,
    models::{Product, SetOption},
    state::AppState,
};

/// Product view for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub product_id: ProductId,
    pub product_type: String,
    /// Set name; `None` for products outside any set (sealed bundles, supplies).
    pub set_name: Option<String>,
    pub name: String,
    pub card_condition: Option<String>,
    pub sku: String,
    pub price: String,
    pub quantity: i32,
}

impl ProductView {
    fn new(product: Product, sets: &Labels<SetId>) -> Self {
        Self {
            product_id: product.product_id,
            product_type: product.product_type,
            set_name: product.set_id.map(|id| sets.get(id)),
            name: product.name,
            card_condition: product.card_condition,
            sku: product.sku,
            price: product.price.to_string(),
            quantity: product.quantity,
        }
    }
}

/// Products list page template.
#[derive(Template)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub current_path: &'static str,
    pub products: Vec<ProductView>,
    pub sets: Vec<SetOption>,
}

/// Products list page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let products = ProductRepository::new(state.pool()).list_all().await?;
    let sets = SetRepository::new(state.pool()).lookup().await?;

    let labels = Labels::new(sets.iter().map(|s| (s.set_id, s.name.clone())));
    let products = products
        .into_iter()
        .map(|product| ProductView::new(product, &labels))
        .collect();

    render(&ProductsIndexTemplate {
        current_path: "/products",
        products,
        sets,
    })
}
