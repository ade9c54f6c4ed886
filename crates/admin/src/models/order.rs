//! Order and order line item models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cardshop_core::{CustomerId, Money, OrderId, OrderItemId, ProductId};

/// An order row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Order {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub order_number: String,
    pub order_date: NaiveDate,
    pub order_status: String,
    pub grand_total: Money,
}

/// Input for inserting an order.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrder {
    pub customer_id: CustomerId,
    pub order_number: String,
    pub order_date: NaiveDate,
    pub order_status: String,
    pub grand_total: Money,
}

/// Order id + order number projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct OrderOption {
    pub order_id: OrderId,
    pub order_number: String,
}

/// An order line item row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct OrderItem {
    pub order_item_id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub unit_price: Money,
    pub quantity: i32,
    pub amount: Money,
}

/// Input for inserting an order line item.
///
/// `amount` is stored as given; nothing recomputes it from
/// `unit_price * quantity`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrderItem {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub unit_price: Money,
    pub quantity: i32,
    pub amount: Money,
}
