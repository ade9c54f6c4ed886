//! Load fixture data from a YAML file.
//!
//! Rows reference each other by natural key rather than by id, since ids
//! are assigned by the database on insert:
//!
//! - a product names its set by `set` (set name)
//! - an order names its customer by `customer` (email)
//! - an order item names its product by `sku`
//!
//! Order items and payments are nested under their order. Every row is
//! inserted through the same repositories the admin server uses, one
//! statement at a time; a failure part-way leaves earlier rows in place.
//!
//! ```yaml
//! sets:
//!   - name: Alpha
//!     release_date: "1993-08-05"
//! products:
//!   - product_type: Single
//!     set: Alpha
//!     name: Black Lotus
//!     card_condition: NM
//!     sku: LEA-232
//!     price: "12500.00"
//!     quantity: 1
//! customers:
//!   - first_name: Ada
//!     ...
//! orders:
//!   - customer: ada@example.com
//!     order_number: ORD-1001
//!     order_date: "2024-03-09"
//!     order_status: Shipped
//!     items:
//!       - sku: LEA-232
//!         quantity: 1
//!     payments:
//!       - payment_number: PAY-1
//!         payment_method: Card
//!         amount: "12500.00"
//!         payment_date: "2024-03-09"
//! ```

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;
use thiserror::Error;

use cardshop_admin::config::{AdminConfig, ConfigError};
use cardshop_admin::db::{
    self, CustomerRepository, OrderItemRepository, OrderRepository, PaymentRepository,
    ProductRepository, RepositoryError, SetRepository,
};
use cardshop_admin::models::{
    CustomerInput, NewCardSet, NewOrder, NewOrderItem, NewPayment, NewProduct,
};
use cardshop_core::{CustomerId, Money, ProductId, SetId};

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid fixture YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("{} fixture error(s): {}", .0.len(), .0.join("; "))]
    Invalid(Vec<String>),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// A complete fixture file.
#[derive(Debug, Default, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub sets: Vec<NewCardSet>,
    #[serde(default)]
    pub products: Vec<ProductFixture>,
    #[serde(default)]
    pub customers: Vec<CustomerInput>,
    #[serde(default)]
    pub orders: Vec<OrderFixture>,
}

/// A product, naming its set by set name.
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    pub product_type: String,
    #[serde(default)]
    pub set: Option<String>,
    pub name: String,
    #[serde(default)]
    pub card_condition: Option<String>,
    pub sku: String,
    pub price: Money,
    pub quantity: i32,
}

/// An order with its line items and payments.
#[derive(Debug, Deserialize)]
pub struct OrderFixture {
    /// Customer email.
    pub customer: String,
    pub order_number: String,
    pub order_date: NaiveDate,
    pub order_status: String,
    /// Defaults to the sum of the item amounts.
    #[serde(default)]
    pub grand_total: Option<Money>,
    #[serde(default)]
    pub items: Vec<ItemFixture>,
    #[serde(default)]
    pub payments: Vec<PaymentFixture>,
}

/// An order line item, naming its product by SKU.
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    pub sku: String,
    pub quantity: i32,
    /// Defaults to the product's listed price.
    #[serde(default)]
    pub unit_price: Option<Money>,
}

/// A payment against the enclosing order.
#[derive(Debug, Deserialize)]
pub struct PaymentFixture {
    pub payment_number: String,
    pub payment_method: String,
    pub amount: Money,
    pub payment_date: NaiveDate,
}

/// Rows inserted per table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub sets: usize,
    pub products: usize,
    pub customers: usize,
    pub orders: usize,
    pub order_items: usize,
    pub payments: usize,
}

/// Load a fixture file, validate it, and insert every row.
///
/// # Errors
///
/// Returns `SeedError` if the file cannot be read or parsed, a reference
/// does not resolve, or an insert fails.
pub async fn run(path: &Path, clear: bool) -> Result<SeedSummary, SeedError> {
    tracing::info!(path = %path.display(), "Loading fixture");
    let fixture = load(path).await?;

    let errors = validate(&fixture);
    if !errors.is_empty() {
        return Err(SeedError::Invalid(errors));
    }

    let config = AdminConfig::from_env()?;
    let pool = db::create_pool(&config.database_url, config.pool).await?;
    tracing::info!("Connected to database");

    if clear {
        clear_all(&pool).await?;
    }

    insert(&pool, &fixture).await
}

/// Read and parse a fixture file.
///
/// # Errors
///
/// Returns `SeedError::Io` or `SeedError::Parse`.
pub async fn load(path: &Path) -> Result<Fixture, SeedError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Check that every reference in the fixture resolves within it.
///
/// Returns one message per problem; empty means the fixture is loadable.
#[must_use]
pub fn validate(fixture: &Fixture) -> Vec<String> {
    let mut errors = Vec::new();

    let set_names: HashSet<&str> = fixture.sets.iter().map(|s| s.name.as_str()).collect();
    let mut emails = HashSet::new();
    let mut skus = HashSet::new();

    for customer in &fixture.customers {
        if !emails.insert(customer.email.as_str()) {
            errors.push(format!("duplicate customer email `{}`", customer.email));
        }
    }

    for product in &fixture.products {
        if !skus.insert(product.sku.as_str()) {
            errors.push(format!("duplicate product sku `{}`", product.sku));
        }
        if let Some(set) = &product.set
            && !set_names.contains(set.as_str())
        {
            errors.push(format!("product `{}` names unknown set `{set}`", product.sku));
        }
    }

    for order in &fixture.orders {
        if !emails.contains(order.customer.as_str()) {
            errors.push(format!(
                "order `{}` names unknown customer `{}`",
                order.order_number, order.customer
            ));
        }
        for item in &order.items {
            if !skus.contains(item.sku.as_str()) {
                errors.push(format!(
                    "order `{}` has an item with unknown sku `{}`",
                    order.order_number, item.sku
                ));
            }
        }
    }

    errors
}

/// `unit_price * quantity`, or an error naming the order on overflow.
fn line_amount(
    order: &OrderFixture,
    unit_price: Money,
    quantity: i32,
) -> Result<Money, SeedError> {
    unit_price
        .amount()
        .checked_mul(Decimal::from(quantity))
        .map(Money::new)
        .ok_or_else(|| {
            SeedError::Invalid(vec![format!(
                "order `{}` has a line amount that overflows",
                order.order_number
            )])
        })
}

/// Unit price and amount for each item of `order`, in order.
fn priced_items(
    order: &OrderFixture,
    prices: &HashMap<&str, Money>,
) -> Result<Vec<(Money, Money)>, SeedError> {
    order
        .items
        .iter()
        .map(|item| {
            let unit_price = item
                .unit_price
                .or_else(|| prices.get(item.sku.as_str()).copied())
                .unwrap_or(Money::ZERO);
            Ok::<_, SeedError>((unit_price, line_amount(order, unit_price, item.quantity)?))
        })
        .collect()
}

/// Sum of the item amounts, or an error naming the order on overflow.
fn items_total(order: &OrderFixture, priced: &[(Money, Money)]) -> Result<Money, SeedError> {
    priced
        .iter()
        .try_fold(Decimal::ZERO, |total, (_, amount)| total.checked_add(amount.amount()))
        .map(Money::new)
        .ok_or_else(|| {
            SeedError::Invalid(vec![format!(
                "order `{}` has an item total that overflows",
                order.order_number
            )])
        })
}

async fn clear_all(pool: &PgPool) -> Result<(), SeedError> {
    tracing::warn!("Truncating all card shop tables");
    sqlx::query(
        "TRUNCATE payments, order_items, orders, products, sets, customers RESTART IDENTITY CASCADE",
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn insert(pool: &PgPool, fixture: &Fixture) -> Result<SeedSummary, SeedError> {
    let mut summary = SeedSummary::default();

    let sets = SetRepository::new(pool);
    let mut set_ids: HashMap<&str, SetId> = HashMap::new();
    for set in &fixture.sets {
        set_ids.insert(set.name.as_str(), sets.create(set).await?);
        summary.sets += 1;
    }

    let products = ProductRepository::new(pool);
    let mut product_ids: HashMap<&str, ProductId> = HashMap::new();
    let mut prices: HashMap<&str, Money> = HashMap::new();
    for product in &fixture.products {
        let input = NewProduct {
            product_type: product.product_type.clone(),
            set_id: product
                .set
                .as_deref()
                .and_then(|name| set_ids.get(name).copied()),
            name: product.name.clone(),
            card_condition: product.card_condition.clone(),
            sku: product.sku.clone(),
            price: product.price,
            quantity: product.quantity,
        };
        product_ids.insert(product.sku.as_str(), products.create(&input).await?);
        prices.insert(product.sku.as_str(), product.price);
        summary.products += 1;
    }

    let customers = CustomerRepository::new(pool);
    let mut customer_ids: HashMap<&str, CustomerId> = HashMap::new();
    for customer in &fixture.customers {
        customer_ids.insert(customer.email.as_str(), customers.create(customer).await?);
        summary.customers += 1;
    }

    let orders = OrderRepository::new(pool);
    let items = OrderItemRepository::new(pool);
    let payments = PaymentRepository::new(pool);
    for order in &fixture.orders {
        let Some(&customer_id) = customer_ids.get(order.customer.as_str()) else {
            return Err(SeedError::Invalid(vec![format!(
                "order `{}` names unknown customer `{}`",
                order.order_number, order.customer
            )]));
        };

        let priced = priced_items(order, &prices)?;
        let grand_total = match order.grand_total {
            Some(total) => total,
            None => items_total(order, &priced)?,
        };
        let order_id = orders
            .create(&NewOrder {
                customer_id,
                order_number: order.order_number.clone(),
                order_date: order.order_date,
                order_status: order.order_status.clone(),
                grand_total,
            })
            .await?;
        summary.orders += 1;

        for (item, (unit_price, amount)) in order.items.iter().zip(priced) {
            let Some(&product_id) = product_ids.get(item.sku.as_str()) else {
                return Err(SeedError::Invalid(vec![format!(
                    "order `{}` has an item with unknown sku `{}`",
                    order.order_number, item.sku
                )]));
            };
            items
                .create(&NewOrderItem {
                    order_id,
                    product_id,
                    unit_price,
                    quantity: item.quantity,
                    amount,
                })
                .await?;
            summary.order_items += 1;
        }

        for payment in &order.payments {
            payments
                .create(&NewPayment {
                    order_id,
                    payment_number: payment.payment_number.clone(),
                    payment_method: payment.payment_method.clone(),
                    amount: payment.amount,
                    payment_date: payment.payment_date,
                })
                .await?;
            summary.payments += 1;
        }

        tracing::debug!(order_number = %order.order_number, order_id = %order_id, "Order seeded");
    }

    Ok(summary)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
sets:
  - name: Alpha
    description: First print run
    release_date: "1993-08-05"
products:
  - product_type: Single
    set: Alpha
    name: Black Lotus
    card_condition: NM
    sku: LEA-232
    price: "12500.00"
    quantity: 1
  - product_type: Sealed
    name: Sleeves
    sku: SUP-001
    price: "4.50"
    quantity: 40
customers:
  - first_name: Ada
    last_name: Lovelace
    email: ada@example.com
    phone_number: "555-0100"
    address1: 1 Main St
    city: Springfield
    state: OR
    zip_code: "97330"
orders:
  - customer: ada@example.com
    order_number: ORD-1001
    order_date: "2024-03-09"
    order_status: Shipped
    items:
      - sku: SUP-001
        quantity: 3
      - sku: LEA-232
        quantity: 1
        unit_price: "12000.00"
    payments:
      - payment_number: PAY-1
        payment_method: Card
        amount: "12013.50"
        payment_date: "2024-03-09"
"#;

    fn parse(yaml: &str) -> Fixture {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_fixture_parses() {
        let fixture = parse(FIXTURE);
        assert_eq!(fixture.sets.len(), 1);
        assert_eq!(fixture.products.len(), 2);
        assert_eq!(fixture.customers[0].address2, None);
        assert_eq!(fixture.orders[0].items.len(), 2);
        assert_eq!(fixture.orders[0].payments[0].amount, Money::from_cents(1_201_350));
    }

    #[test]
    fn test_valid_fixture_has_no_errors() {
        assert!(validate(&parse(FIXTURE)).is_empty());
    }

    #[test]
    fn test_unknown_references_are_reported() {
        let mut fixture = parse(FIXTURE);
        fixture.products[0].set = Some("Beta".to_string());
        fixture.orders[0].customer = "nobody@example.com".to_string();
        fixture.orders[0].items[0].sku = "NOPE".to_string();

        let errors = validate(&fixture);

        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("unknown set `Beta`"));
        assert!(errors[1].contains("unknown customer"));
        assert!(errors[2].contains("unknown sku `NOPE`"));
    }

    #[test]
    fn test_duplicate_sku_is_reported() {
        let mut fixture = parse(FIXTURE);
        fixture.products[1].sku = "LEA-232".to_string();
        let errors = validate(&fixture);
        assert!(errors.iter().any(|e| e.contains("duplicate product sku")));
    }

    #[test]
    fn test_items_default_to_product_price() {
        let fixture = parse(FIXTURE);
        let prices: HashMap<&str, Money> = fixture
            .products
            .iter()
            .map(|p| (p.sku.as_str(), p.price))
            .collect();

        let priced = priced_items(&fixture.orders[0], &prices).unwrap();

        assert_eq!(priced[0], (Money::from_cents(450), Money::from_cents(1_350)));
        assert_eq!(
            priced[1],
            (Money::from_cents(1_200_000), Money::from_cents(1_200_000))
        );
    }

    #[test]
    fn test_duplicate_email_is_reported() {
        let mut fixture = parse(FIXTURE);
        let mut twin = fixture.customers[0].clone();
        twin.first_name = "Augusta".to_string();
        fixture.customers.push(twin);

        let errors = validate(&fixture);

        assert_eq!(errors, vec!["duplicate customer email `ada@example.com`".to_string()]);
    }

    #[test]
    fn test_overflowing_line_amount_is_rejected() {
        let mut fixture = parse(FIXTURE);
        fixture.orders[0].items[0].unit_price = Some(Money::new(Decimal::MAX));
        fixture.orders[0].items[0].quantity = 2;

        let err = priced_items(&fixture.orders[0], &HashMap::new()).unwrap_err();

        assert!(err.to_string().contains("`ORD-1001` has a line amount that overflows"));
    }

    #[test]
    fn test_overflowing_item_total_is_rejected() {
        let fixture = parse(FIXTURE);
        let max = Money::new(Decimal::MAX);
        let priced = [(max, max), (max, max)];

        let err = items_total(&fixture.orders[0], &priced).unwrap_err();

        assert!(err.to_string().contains("item total that overflows"));
    }

    #[test]
    fn test_items_total_sums_amounts() {
        let fixture = parse(FIXTURE);
        let priced = [
            (Money::from_cents(450), Money::from_cents(1_350)),
            (Money::from_cents(1_200_000), Money::from_cents(1_200_000)),
        ];
        assert_eq!(
            items_total(&fixture.orders[0], &priced).unwrap(),
            Money::from_cents(1_201_350)
        );
    }

    #[test]
    fn test_invalid_error_lists_every_problem() {
        let err = SeedError::Invalid(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "2 fixture error(s): a; b");
    }
}
