//! Order items list route handler.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use cardshop_core::{OrderId, OrderItemId, ProductId};

use super::{Labels, render};
use crate::{
    db::{OrderItemRepository, OrderRepository, ProductRepository},
    error::AppError,
    filters,
    models::{OrderItem, OrderOption, ProductOption},
    state::AppState,
};

/// Order line item view for templates.
#[derive(Debug, Clone)]
pub struct OrderItemView {
    pub order_item_id: OrderItemId,
    pub order_id: OrderId,
    pub order_number: String,
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price: String,
    pub quantity: i32,
    pub amount: String,
}

impl OrderItemView {
    fn new(item: OrderItem, orders: &Labels<OrderId>, products: &Labels<ProductId>) -> Self {
        Self {
            order_item_id: item.order_item_id,
            order_id: item.order_id,
            order_number: orders.get(item.order_id),
            product_id: item.product_id,
            product_name: products.get(item.product_id),
            unit_price: item.unit_price.to_string(),
            quantity: item.quantity,
            amount: item.amount.to_string(),
        }
    }
}

/// Order items list page template.
#[derive(Template)]
#[template(path = "order_items/index.html")]
pub struct OrderItemsIndexTemplate {
    pub current_path: &'static str,
    pub order_items: Vec<OrderItemView>,
    pub orders: Vec<OrderOption>,
    pub products: Vec<ProductOption>,
}

/// Order items list page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let items = OrderItemRepository::new(state.pool()).list_all().await?;
    let orders = OrderRepository::new(state.pool()).lookup().await?;
    let products = ProductRepository::new(state.pool()).lookup().await?;

    let order_labels = Labels::new(orders.iter().map(|o| (o.order_id, o.order_number.clone())));
    let product_labels = Labels::new(products.iter().map(|p| (p.product_id, p.name.clone())));
    let order_items = items
        .into_iter()
        .map(|item| OrderItemView::new(item, &order_labels, &product_labels))
        .collect();

    render(&OrderItemsIndexTemplate {
        current_path: "/orderItems",
        order_items,
        orders,
        products,
    })
}
