//! List pages against a real database.
//!
//! Each test seeds one set → product → customer → order → item → payment
//! chain through the repositories, then checks that the list pages render
//! the rows with foreign keys resolved to display names.
//!
//! Run with: `cargo test -p cardshop-integration-tests -- --ignored`

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use chrono::NaiveDate;
use uuid::Uuid;

use cardshop_admin::app;
use cardshop_admin::db::{
    CustomerRepository, OrderItemRepository, OrderRepository, PaymentRepository,
    ProductRepository, SetRepository,
};
use cardshop_admin::models::{
    CustomerInput, NewCardSet, NewOrder, NewOrderItem, NewPayment, NewProduct,
};
use cardshop_admin::state::AppState;
use cardshop_core::{CustomerId, Money, OrderId, OrderItemId, PaymentId, ProductId, SetId};
use cardshop_integration_tests::{database_state, get};

/// Ids and unique names of one seeded chain.
struct Seeded {
    tag: String,
    set_id: SetId,
    product_id: ProductId,
    customer_id: CustomerId,
    order_id: OrderId,
    order_item_id: OrderItemId,
    payment_id: PaymentId,
}

impl Seeded {
    fn set_name(&self) -> String {
        format!("Set {}", self.tag)
    }

    fn product_name(&self) -> String {
        format!("Card {}", self.tag)
    }

    fn customer_name(&self) -> String {
        format!("Ada L{}", self.tag)
    }

    fn order_number(&self) -> String {
        format!("ORD-{}", self.tag)
    }

    fn payment_number(&self) -> String {
        format!("PAY-{}", self.tag)
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

async fn seed(state: &AppState) -> Seeded {
    // Order and payment numbers are VARCHAR(20).
    let tag = Uuid::new_v4().simple().to_string()[..12].to_string();
    let pool = state.pool();

    let set_id = SetRepository::new(pool)
        .create(&NewCardSet {
            name: format!("Set {tag}"),
            description: Some("Seeded for listing tests".to_string()),
            release_date: Some(date(1993, 8, 5)),
        })
        .await
        .unwrap();

    let product_id = ProductRepository::new(pool)
        .create(&NewProduct {
            product_type: "single".to_string(),
            set_id: Some(set_id),
            name: format!("Card {tag}"),
            card_condition: Some("NM".to_string()),
            sku: format!("SKU-{tag}"),
            price: Money::from_cents(450),
            quantity: 3,
        })
        .await
        .unwrap();

    let customer_id = CustomerRepository::new(pool)
        .create(&CustomerInput {
            first_name: "Ada".to_string(),
            last_name: format!("L{tag}"),
            email: format!("{tag}@example.com"),
            phone_number: "541-555-0100".to_string(),
            address1: "1 Main St".to_string(),
            address2: None,
            city: "Springfield".to_string(),
            state: "OR".to_string(),
            zip_code: "97330".to_string(),
        })
        .await
        .unwrap();

    let order_id = OrderRepository::new(pool)
        .create(&NewOrder {
            customer_id,
            order_number: format!("ORD-{tag}"),
            order_date: date(2026, 3, 14),
            order_status: "shipped".to_string(),
            grand_total: Money::from_cents(900),
        })
        .await
        .unwrap();

    let order_item_id = OrderItemRepository::new(pool)
        .create(&NewOrderItem {
            order_id,
            product_id,
            unit_price: Money::from_cents(450),
            quantity: 2,
            amount: Money::from_cents(900),
        })
        .await
        .unwrap();

    let payment_id = PaymentRepository::new(pool)
        .create(&NewPayment {
            order_id,
            payment_number: format!("PAY-{tag}"),
            payment_method: "card".to_string(),
            amount: Money::from_cents(900),
            payment_date: date(2026, 3, 15),
        })
        .await
        .unwrap();

    Seeded {
        tag,
        set_id,
        product_id,
        customer_id,
        order_id,
        order_item_id,
        payment_id,
    }
}

// ============================================================================
// Pages
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_sets_page_lists_seeded_set() {
    let state = database_state().await;
    let seeded = seed(&state).await;

    let response = get(app(state), "/sets").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(&format!("<td>{}</td>", seeded.set_id)));
    assert!(response.body.contains(&format!("<td>{}</td>", seeded.set_name())));
    assert!(response.body.contains("<td>1993-08-05</td>"));
}

#[tokio::test]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_products_page_resolves_set_name() {
    let state = database_state().await;
    let seeded = seed(&state).await;

    let response = get(app(state), "/products").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(&format!("<td>{}</td>", seeded.product_id)));
    assert!(response.body.contains(&format!("<td>{}</td>", seeded.product_name())));
    assert!(response.body.contains(&format!("<td>{}</td>", seeded.set_name())));
    assert!(response.body.contains(&format!(
        r#"<option value="{}">{}</option>"#,
        seeded.set_id,
        seeded.set_name()
    )));
    assert!(response.body.contains("$4.50"));
}

#[tokio::test]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_orders_page_resolves_customer_name() {
    let state = database_state().await;
    let seeded = seed(&state).await;

    let response = get(app(state), "/orders").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(&format!("<td>{}</td>", seeded.order_number())));
    assert!(response.body.contains(&format!(
        r#"<td title="Customer {}">{}</td>"#,
        seeded.customer_id,
        seeded.customer_name()
    )));
    assert!(response.body.contains(&format!(
        r#"<option value="{}">{}</option>"#,
        seeded.customer_id,
        seeded.customer_name()
    )));
    assert!(response.body.contains("<td>2026-03-14</td>"));
    assert!(response.body.contains("$9.00"));
}

#[tokio::test]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_order_items_page_resolves_order_and_product() {
    let state = database_state().await;
    let seeded = seed(&state).await;

    let response = get(app(state), "/orderItems").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(&format!("<td>{}</td>", seeded.order_item_id)));
    assert!(response.body.contains(&format!(
        r#"<td title="Order {}">{}</td>"#,
        seeded.order_id,
        seeded.order_number()
    )));
    assert!(response.body.contains(&format!(
        r#"<td title="Product {}">{}</td>"#,
        seeded.product_id,
        seeded.product_name()
    )));
    assert!(response.body.contains(&format!(
        r#"<option value="{}">{}</option>"#,
        seeded.product_id,
        seeded.product_name()
    )));
}

#[tokio::test]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_payments_page_resolves_order_number() {
    let state = database_state().await;
    let seeded = seed(&state).await;

    let response = get(app(state), "/payments").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(&format!("<td>{}</td>", seeded.payment_id)));
    assert!(response.body.contains(&format!("<td>{}</td>", seeded.payment_number())));
    assert!(response.body.contains(&format!(
        r#"<td title="Order {}">{}</td>"#,
        seeded.order_id,
        seeded.order_number()
    )));
    assert!(response.body.contains("<td>2026-03-15</td>"));
}

// ============================================================================
// Ordering
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running PostgreSQL database"]
async fn test_rows_are_listed_in_id_order() {
    let state = database_state().await;
    let first = seed(&state).await;
    let second = seed(&state).await;

    let orders = OrderRepository::new(state.pool()).list_all().await.unwrap();
    let ids: Vec<OrderId> = orders.iter().map(|o| o.order_id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);

    let page = get(app(state), "/payments").await.body;
    let a = page.find(&first.payment_number()).unwrap();
    let b = page.find(&second.payment_number()).unwrap();
    assert!(a < b);
}
