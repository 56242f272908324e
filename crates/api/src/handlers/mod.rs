//! Request handlers.
//!
//! Handlers delegate to the injected person store and map errors via
//! [`AppError`](crate::error::AppError).

pub mod people;
