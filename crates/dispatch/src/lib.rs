//! Fan-out dispatch engine.
//!
//! Delivers one inbound JSON payload to every destination registered for an
//! account, concurrently, and reports the outcome of each delivery:
//!
//! - [`DispatchEngine`] -- owns the shared HTTP client and runs the fan-out.
//! - [`DispatchConfig`] -- per-delivery timeouts and the concurrency cap.
//! - [`DispatchReport`] -- one [`DeliveryResult`] per destination.
//! - [`request`] -- construction of the outbound request for each method.
//!
//! Individual delivery failures never fail a dispatch. They are captured in
//! the report and logged; nothing is retried.

pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod request;

pub use config::DispatchConfig;
pub use engine::DispatchEngine;
pub use error::DeliveryError;
pub use report::{DeliveryOutcome, DeliveryResult, DispatchReport};
