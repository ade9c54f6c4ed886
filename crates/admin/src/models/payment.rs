//! Payment models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cardshop_core::{Money, OrderId, PaymentId};

/// A payment row recorded against an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Payment {
    pub payment_id: PaymentId,
    pub order_id: OrderId,
    pub payment_number: String,
    pub payment_method: String,
    pub amount: Money,
    pub payment_date: NaiveDate,
}

/// Input for inserting a payment.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPayment {
    pub order_id: OrderId,
    pub payment_number: String,
    pub payment_method: String,
    pub amount: Money,
    pub payment_date: NaiveDate,
}
