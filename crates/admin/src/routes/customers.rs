//! Customer route handlers.
//!
//! The only entity with write routes: create from the new-customer form and
//! update from the edit form. Both overwrite every editable column.

use askama::Template;
use axum::{
    extract::State,
    response::{Html, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use cardshop_core::CustomerId;

use super::render;
use crate::{
    db::CustomerRepository,
    error::AppError,
    extractors::{AppForm, AppPath},
    filters,
    models::{Customer, CustomerInput},
    state::AppState,
};

const CUSTOMERS_PATH: &str = "/customers";

/// Body of `POST /customers`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerForm {
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

impl From<CreateCustomerForm> for CustomerInput {
    fn from(form: CreateCustomerForm) -> Self {
        Self {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            phone_number: form.phone_number,
            address1: form.address1,
            address2: non_empty(form.address2),
            city: form.city,
            state: form.state,
            zip_code: form.zip_code,
        }
    }
}

/// Body of `POST /customers/{id}`.
///
/// Older edit forms named the address fields `line1`/`line2`; both spellings
/// are accepted.
#[derive(Debug, Deserialize)]
pub struct UpdateCustomerForm {
    #[serde(rename = "update_customer_firstName")]
    pub first_name: String,
    #[serde(rename = "update_customer_lastName")]
    pub last_name: String,
    #[serde(rename = "update_customer_email")]
    pub email: String,
    #[serde(rename = "update_customer_phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "update_customer_address1", alias = "update_customer_line1")]
    pub address1: String,
    #[serde(
        default,
        rename = "update_customer_address2",
        alias = "update_customer_line2"
    )]
    pub address2: Option<String>,
    #[serde(rename = "update_customer_city")]
    pub city: String,
    #[serde(rename = "update_customer_state")]
    pub state: String,
    #[serde(rename = "update_customer_zipCode")]
    pub zip_code: String,
}

impl From<UpdateCustomerForm> for CustomerInput {
    fn from(form: UpdateCustomerForm) -> Self {
        Self {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            phone_number: form.phone_number,
            address1: form.address1,
            address2: non_empty(form.address2),
            city: form.city,
            state: form.state,
            zip_code: form.zip_code,
        }
    }
}

/// An empty second address line is stored as NULL.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Customers list page template.
#[derive(Template)]
#[template(path = "customers/index.html")]
pub struct CustomersIndexTemplate {
    pub current_path: &'static str,
    pub customers: Vec<Customer>,
}

/// New customer form template.
#[derive(Template)]
#[template(path = "customers/new.html")]
pub struct CustomerNewTemplate {
    pub current_path: &'static str,
}

/// Edit customer form template.
#[derive(Template)]
#[template(path = "customers/edit.html")]
pub struct CustomerEditTemplate {
    pub current_path: &'static str,
    pub customer: Customer,
}

/// Customers list page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let customers = CustomerRepository::new(state.pool()).list_all().await?;

    render(&CustomersIndexTemplate {
        current_path: CUSTOMERS_PATH,
        customers,
    })
}

/// New customer form handler.
#[instrument]
pub async fn new_customer() -> Result<Html<String>, AppError> {
    render(&CustomerNewTemplate {
        current_path: CUSTOMERS_PATH,
    })
}

/// Create customer handler.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    AppForm(form): AppForm<CreateCustomerForm>,
) -> Result<Redirect, AppError> {
    let input = CustomerInput::from(form);
    let customer_id = CustomerRepository::new(state.pool()).create(&input).await?;
    tracing::info!(customer_id = %customer_id, "Customer created");

    Ok(Redirect::to(CUSTOMERS_PATH))
}

/// Edit customer form handler.
#[instrument(skip(state))]
pub async fn edit(
    State(state): State<AppState>,
    AppPath(id): AppPath<CustomerId>,
) -> Result<Html<String>, AppError> {
    let customer = CustomerRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer not found.".to_string()))?;

    render(&CustomerEditTemplate {
        current_path: CUSTOMERS_PATH,
        customer,
    })
}

/// Update customer handler.
///
/// Redirects back to the listing whether or not a row matched.
#[instrument(skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<CustomerId>,
    AppForm(form): AppForm<UpdateCustomerForm>,
) -> Result<Redirect, AppError> {
    let input = CustomerInput::from(form);
    let rows_affected = CustomerRepository::new(state.pool())
        .update(id, &input)
        .await?;
    tracing::debug!(customer_id = %id, rows_affected, "Customer updated");

    Ok(Redirect::to(CUSTOMERS_PATH))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::Body,
        extract::FromRequest,
        http::{Request, header::CONTENT_TYPE},
    };
    use serde::de::DeserializeOwned;

    use super::*;

    async fn decode<T>(body: &'static str) -> Result<T, AppError>
    where
        T: DeserializeOwned + Send,
    {
        let request = Request::builder()
            .method("POST")
            .uri(CUSTOMERS_PATH)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        AppForm::<T>::from_request(request, &())
            .await
            .map(|AppForm(form)| form)
    }

    fn sample_customer() -> Customer {
        Customer {
            customer_id: CustomerId::new(3),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            phone_number: "555-0100".to_string(),
            address1: "1 Main".to_string(),
            address2: None,
            city: "Springfield".to_string(),
            state: "OR".to_string(),
            zip_code: "97330".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_form_reads_camel_case_fields() {
        let form: CreateCustomerForm = decode(
            "firstName=Ada&lastName=Lovelace&email=ada%40x.com&phoneNumber=555-0100\
             &address1=1+Main&address2=&city=Springfield&state=OR&zipCode=97330",
        )
        .await
        .unwrap();
        let input = CustomerInput::from(form);

        assert_eq!(input.first_name, "Ada");
        assert_eq!(input.email, "ada@x.com");
        assert_eq!(input.address1, "1 Main");
        assert_eq!(input.address2, None);
        assert_eq!(input.zip_code, "97330");
    }

    #[tokio::test]
    async fn test_create_form_allows_missing_address2() {
        let form: CreateCustomerForm = decode(
            "firstName=Ada&lastName=Lovelace&email=a&phoneNumber=1\
             &address1=1+Main&city=C&state=OR&zipCode=1",
        )
        .await
        .unwrap();
        assert_eq!(CustomerInput::from(form).address2, None);
    }

    #[tokio::test]
    async fn test_create_form_requires_first_name() {
        let result = decode::<CreateCustomerForm>(
            "lastName=Lovelace&email=a&phoneNumber=1&address1=1&city=C&state=OR&zipCode=1",
        )
        .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_update_form_accepts_address_fields() {
        let form: UpdateCustomerForm = decode(
            "update_customer_firstName=Ada&update_customer_lastName=King\
             &update_customer_email=ada%40x.com&update_customer_phoneNumber=555\
             &update_customer_address1=2+Elm&update_customer_address2=Apt+4\
             &update_customer_city=Salem&update_customer_state=OR&update_customer_zipCode=97301",
        )
        .await
        .unwrap();
        let input = CustomerInput::from(form);

        assert_eq!(input.last_name, "King");
        assert_eq!(input.address1, "2 Elm");
        assert_eq!(input.address2.as_deref(), Some("Apt 4"));
    }

    #[tokio::test]
    async fn test_update_form_accepts_legacy_line_fields() {
        let form: UpdateCustomerForm = decode(
            "update_customer_firstName=Ada&update_customer_lastName=King\
             &update_customer_email=a&update_customer_phoneNumber=1\
             &update_customer_line1=2+Elm&update_customer_line2=\
             &update_customer_city=Salem&update_customer_state=OR&update_customer_zipCode=1",
        )
        .await
        .unwrap();
        let input = CustomerInput::from(form);

        assert_eq!(input.address1, "2 Elm");
        assert_eq!(input.address2, None);
    }

    #[test]
    fn test_edit_template_prefills_fields() {
        let html = CustomerEditTemplate {
            current_path: CUSTOMERS_PATH,
            customer: sample_customer(),
        }
        .render()
        .unwrap();

        assert!(html.contains(r#"action="/customers/3""#));
        assert!(html.contains(r#"name="update_customer_firstName""#));
        assert!(html.contains(r#"value="Lovelace""#));
    }

    #[test]
    fn test_index_template_lists_customers_and_escapes() {
        let mut customer = sample_customer();
        customer.first_name = "<b>Ada</b>".to_string();
        let html = CustomersIndexTemplate {
            current_path: CUSTOMERS_PATH,
            customers: vec![customer],
        }
        .render()
        .unwrap();

        assert!(html.contains("Lovelace"));
        assert!(html.contains("/customers/3/edit"));
        assert!(!html.contains("<b>Ada</b>"));
    }

    #[test]
    fn test_new_template_posts_to_customers() {
        let html = CustomerNewTemplate {
            current_path: CUSTOMERS_PATH,
        }
        .render()
        .unwrap();

        assert!(html.contains(r#"action="/customers""#));
        assert!(html.contains(r#"name="firstName""#));
        assert!(html.contains(r#"name="zipCode""#));
    }
}
