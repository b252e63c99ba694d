//! Per-destination results of a dispatch.

use serde::Serialize;
use datapusher_core::types::DbId;

use crate::error::DeliveryError;

/// Terminal state of one delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    /// The destination answered with a 2xx status.
    Delivered { status_code: u16 },
    /// The destination answered with a non-2xx status.
    Rejected { status_code: u16 },
    /// No complete response within the configured timeout.
    TimedOut,
    /// Connection, DNS, TLS or request-construction failure.
    Failed { reason: String },
    /// No request was built (the stored method is not supported).
    Skipped { reason: String },
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, DeliveryOutcome::Skipped { .. })
    }
}

impl From<DeliveryError> for DeliveryOutcome {
    fn from(err: DeliveryError) -> Self {
        match err {
            DeliveryError::HttpStatus(status_code) => DeliveryOutcome::Rejected { status_code },
            DeliveryError::Request(e) if e.is_timeout() => DeliveryOutcome::TimedOut,
            other => DeliveryOutcome::Failed {
                reason: other.to_string(),
            },
        }
    }
}

/// Outcome of delivering the payload to one destination.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryResult {
    pub destination_id: DbId,
    pub url: String,
    /// The method as stored on the destination (may be unsupported).
    pub method: String,
    pub outcome: DeliveryOutcome,
    pub elapsed_ms: u64,
}

/// Aggregate result of one dispatch. Results are in completion order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DispatchReport {
    pub results: Vec<DeliveryResult>,
}

impl DispatchReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn delivered_count(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_delivered()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_skipped()).count()
    }

    /// Deliveries that were attempted and did not succeed.
    pub fn failed_count(&self) -> usize {
        self.total() - self.delivered_count() - self.skipped_count()
    }

    /// Result for a given destination, if it was part of this dispatch.
    pub fn result_for(&self, destination_id: DbId) -> Option<&DeliveryResult> {
        self.results.iter().find(|r| r.destination_id == destination_id)
    }
}
