//! Product and card set models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cardshop_core::{Money, ProductId, SetId};

/// A product row: a single card or a sealed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Product {
    pub product_id: ProductId,
    pub product_type: String,
    pub set_id: Option<SetId>,
    pub name: String,
    pub card_condition: Option<String>,
    pub sku: String,
    pub price: Money,
    pub quantity: i32,
}

/// Input for inserting a product.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub product_type: String,
    #[serde(default)]
    pub set_id: Option<SetId>,
    pub name: String,
    #[serde(default)]
    pub card_condition: Option<String>,
    pub sku: String,
    pub price: Money,
    pub quantity: i32,
}

/// Product id + name projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ProductOption {
    pub product_id: ProductId,
    pub name: String,
}

/// A card set row (an expansion or release).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct CardSet {
    pub set_id: SetId,
    pub name: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
}

/// Input for inserting a card set.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCardSet {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
}

/// Set id + name projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct SetOption {
    pub set_id: SetId,
    pub name: String,
}
