//! Shared domain types for the data pusher workspace.
//!
//! This crate has no internal dependencies so the repository layer, the
//! dispatch engine and the HTTP server can all build on it.

pub mod error;
pub mod http_method;
pub mod query;
pub mod tokens;
pub mod types;
