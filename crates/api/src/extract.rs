//! Request extractors whose rejections go through [`AppError`].

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with its rejection reported as [`AppError::InvalidBody`],
/// so malformed bodies get the same `{error, code}` shape as every other
/// failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
