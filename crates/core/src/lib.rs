//! Domain types, payload validation, and the shared error type for the
//! records service.
//!
//! This crate has no internal dependencies so it can be used by both the
//! store and the API layer.

pub mod error;
pub mod record;
pub mod types;
pub mod validation;
