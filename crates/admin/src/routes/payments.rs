//! Payments list route handler.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use cardshop_core::{OrderId, PaymentId};

use super::{Labels, render};
use crate::{
    db::{OrderRepository, PaymentRepository},
    error::AppError,
    filters,
    models::{OrderOption, Payment},
    state::AppState,
};

/// Payment view for templates.
#[derive(Debug, Clone)]
pub struct PaymentView {
    pub payment_id: PaymentId,
    pub order_id: OrderId,
    pub order_number: String,
    pub payment_number: String,
    pub payment_method: String,
    pub amount: String,
    pub payment_date: String,
}

impl PaymentView {
    fn new(payment: Payment, orders: &Labels<OrderId>) -> Self {
        Self {
            payment_id: payment.payment_id,
            order_id: payment.order_id,
            order_number: orders.get(payment.order_id),
            payment_number: payment.payment_number,
            payment_method: payment.payment_method,
            amount: payment.amount.to_string(),
            payment_date: payment.payment_date.to_string(),
        }
    }
}

/// Payments list page template.
#[derive(Template)]
#[template(path = "payments/index.html")]
pub struct PaymentsIndexTemplate {
    pub current_path: &'static str,
    pub payments: Vec<PaymentView>,
    pub orders: Vec<OrderOption>,
}

/// Payments list page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let payments = PaymentRepository::new(state.pool()).list_all().await?;
    let orders = OrderRepository::new(state.pool()).lookup().await?;

    let labels = Labels::new(orders.iter().map(|o| (o.order_id, o.order_number.clone())));
    let payments = payments
        .into_iter()
        .map(|payment| PaymentView::new(payment, &labels))
        .collect();

    render(&PaymentsIndexTemplate {
        current_path: "/payments",
        payments,
        orders,
    })
}
