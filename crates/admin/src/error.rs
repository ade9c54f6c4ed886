//! Unified error handling for admin.

use axum::{
    extract::rejection::{FormRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;

const DATABASE_ERROR_MESSAGE: &str = "An error occurred while executing the database queries.";
const RENDER_ERROR_MESSAGE: &str = "An error occurred while rendering the page.";
const BAD_REQUEST_MESSAGE: &str = "The submitted request could not be processed.";

/// Application-level error type for the admin panel.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Resource not found. The message is shown to the client.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed path or form input.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Database(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::Database(_) | Self::Render(_) => {
                let event_id = sentry::capture_error(&self);
                tracing::error!(
                    error = %self,
                    sentry_event_id = %event_id,
                    "Admin request error"
                );
            }
            Self::BadRequest(detail) => {
                tracing::warn!(detail = %detail, "Rejected malformed request");
            }
            Self::NotFound(_) => {}
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(_) => DATABASE_ERROR_MESSAGE.to_string(),
            Self::Render(_) => RENDER_ERROR_MESSAGE.to_string(),
            Self::BadRequest(_) => BAD_REQUEST_MESSAGE.to_string(),
            Self::NotFound(message) => message.clone(),
        };

        (self.status(), message).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    async fn body_of(err: AppError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Customer not found.".to_string());
        assert_eq!(err.to_string(), "Not found: Customer not found.");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[tokio::test]
    async fn test_database_error_hides_details() {
        let err = AppError::Database(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "An error occurred while executing the database queries.");
    }

    #[tokio::test]
    async fn test_not_found_shows_message() {
        let (status, body) = body_of(AppError::NotFound("Customer not found.".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Customer not found.");
    }

    #[tokio::test]
    async fn test_bad_request_uses_fixed_message() {
        let (status, body) = body_of(AppError::BadRequest("missing field `city`".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "The submitted request could not be processed.");
    }

    #[test]
    fn test_render_error_is_server_error() {
        assert_eq!(
            AppError::Render(askama::Error::Custom("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
