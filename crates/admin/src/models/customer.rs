//! Customer models.

use serde::{Deserialize, Serialize};

use cardshop_core::CustomerId;

/// A customer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address1: String,
    /// Second address line; NULL when the form field was left empty.
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Every editable customer column.
///
/// Used for both inserts and updates; an update overwrites all of these.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomerInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address1: String,
    #[serde(default)]
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Customer id + name projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct CustomerOption {
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
}

impl CustomerOption {
    /// "First Last" for display.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
