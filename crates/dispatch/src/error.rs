/// Error type for a single outbound delivery.
///
/// These never escape the engine: each one is folded into the
/// [`DeliveryOutcome`](crate::DeliveryOutcome) of its destination.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The underlying HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A configured header name or value is not valid HTTP.
    #[error("Invalid header {name:?}: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// The destination answered with a non-2xx status code.
    #[error("Destination returned HTTP {0}")]
    HttpStatus(u16),
}
