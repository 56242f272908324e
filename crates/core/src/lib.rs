//! Domain types shared by the storage and HTTP layers.
//!
//! This crate has zero internal dependencies so it can be used by both the
//! repository layer and the API without pulling in either.

pub mod error;
pub mod search;
pub mod types;
