//! Landing page.

use askama::Template;
use axum::response::Html;
use tracing::instrument;

use super::render;
use crate::{error::AppError, filters};

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub current_path: &'static str,
}

/// Home page handler, mounted at both `/` and `/home`.
#[instrument]
pub async fn index() -> Result<Html<String>, AppError> {
    render(&HomeTemplate { current_path: "/" })
}
