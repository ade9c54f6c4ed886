//! Card sets list route handler.

use askama::Template;
use axum::{extract::State, response::Html};
use tracing::instrument;

use super::render;
use crate::{
    db::SetRepository,
    error::AppError,
    filters,
    models::CardSet,
    state::AppState,
};

/// Sets list page template.
#[derive(Template)]
#[template(path = "sets/index.html")]
pub struct SetsIndexTemplate {
    pub current_path: &'static str,
    pub sets: Vec<CardSet>,
}

/// Sets list page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let sets = SetRepository::new(state.pool()).list_all().await?;

    render(&SetsIndexTemplate {
        current_path: "/sets",
        sets,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cardshop_core::SetId;
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_template_renders_optional_columns() {
        let html = SetsIndexTemplate {
            current_path: "/sets",
            sets: vec![
                CardSet {
                    set_id: SetId::new(1),
                    name: "Alpha".to_string(),
                    description: Some("First print run".to_string()),
                    release_date: NaiveDate::from_ymd_opt(1993, 8, 5),
                },
                CardSet {
                    set_id: SetId::new(2),
                    name: "Promo".to_string(),
                    description: None,
                    release_date: None,
                },
            ],
        }
        .render()
        .unwrap();

        assert!(html.contains("1993-08-05"));
        assert!(html.contains("First print run"));
        assert!(html.contains("Promo"));
    }
}
