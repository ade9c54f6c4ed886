//! Orders list route handler.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use cardshop_core::{CustomerId, OrderId};

use super::{Labels, render};
use crate::{
    db::{CustomerRepository, OrderRepository},
    error::AppError,
    filters,
    models::{CustomerOption, Order},
    state::AppState,
};

/// Order view for templates.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub order_number: String,
    pub order_date: String,
    pub order_status: String,
    pub grand_total: String,
}

impl OrderView {
    fn new(order: Order, customers: &Labels<CustomerId>) -> Self {
        Self {
            order_id: order.order_id,
            customer_id: order.customer_id,
            customer_name: customers.get(order.customer_id),
            order_number: order.order_number,
            order_date: order.order_date.to_string(),
            order_status: order.order_status,
            grand_total: order.grand_total.to_string(),
        }
    }
}

/// Orders list page template.
#[derive(Template)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    pub current_path: &'static str,
    pub orders: Vec<OrderView>,
    pub customers: Vec<CustomerOption>,
}

/// Orders list page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let orders = OrderRepository::new(state.pool()).list_all().await?;
    let customers = CustomerRepository::new(state.pool()).lookup().await?;

    let labels = Labels::new(customers.iter().map(|c| (c.customer_id, c.full_name())));
    let orders = orders
        .into_iter()
        .map(|order| OrderView::new(order, &labels))
        .collect();

    render(&OrdersIndexTemplate {
        current_path: "/orders",
        orders,
        customers,
    })
}
