//! Request extractors that reject with [`AppError`].
//!
//! axum's stock `Form` and `Path` reject with their own plain-text
//! responses. These wrappers route those rejections through `AppError` so
//! every failure is logged and answered the same way.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `application/x-www-form-urlencoded` body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct AppForm<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
