//! The fan-out dispatch engine.
//!
//! [`DispatchEngine::dispatch`] submits one request per destination, keeps at
//! most `max_concurrency` of them in flight, and returns only once every
//! delivery has reached a terminal state. There is no early exit on the first
//! failure or the first success, and no retry.

use std::time::Instant;

use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde_json::Value;
use datapusher_core::http_method::HttpMethod;
use datapusher_db::models::destination::Destination;

use crate::config::DispatchConfig;
use crate::error::DeliveryError;
use crate::report::{DeliveryOutcome, DeliveryResult, DispatchReport};
use crate::request::build_request;

const USER_AGENT: &str = concat!("datapusher/", env!("CARGO_PKG_VERSION"));

/// Delivers payloads to destinations over a shared HTTP connection pool.
pub struct DispatchEngine {
    client: Client,
    config: DispatchConfig,
}

impl DispatchEngine {
    /// Create an engine with a client configured from `config`.
    ///
    /// Redirects are not followed: a 3xx answer is the destination's final
    /// response and is reported as rejected.
    pub fn new(config: DispatchConfig) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Deliver `payload` to every destination and wait for all of them.
    ///
    /// Returns one [`DeliveryResult`] per destination, in completion order.
    /// An empty destination list returns an empty report without touching
    /// the network.
    pub async fn dispatch(&self, payload: &Value, destinations: &[Destination]) -> DispatchReport {
        if destinations.is_empty() {
            return DispatchReport::default();
        }

        // Collected first: a `map` closure over borrowed destinations makes
        // the returned future non-`Send`.
        let deliveries: Vec<_> = destinations
            .iter()
            .map(|destination| self.deliver(payload, destination))
            .collect();

        let results = stream::iter(deliveries)
            .buffer_unordered(self.config.max_concurrency)
            .collect::<Vec<_>>()
            .await;

        DispatchReport { results }
    }

    /// Deliver to a single destination. Never fails: every error is folded
    /// into the returned outcome.
    async fn deliver(&self, payload: &Value, destination: &Destination) -> DeliveryResult {
        let started = Instant::now();

        let outcome = match destination.method() {
            Ok(method) => match self.send(method, payload, destination).await {
                Ok(status_code) => DeliveryOutcome::Delivered { status_code },
                Err(e) => {
                    tracing::warn!(
                        destination_id = destination.id,
                        url = %destination.url,
                        method = %method,
                        error = %e,
                        "Delivery failed",
                    );
                    DeliveryOutcome::from(e)
                }
            },
            Err(e) => {
                tracing::warn!(
                    destination_id = destination.id,
                    url = %destination.url,
                    error = %e,
                    "Skipping destination with unsupported method",
                );
                DeliveryOutcome::Skipped {
                    reason: e.to_string(),
                }
            }
        };

        DeliveryResult {
            destination_id: destination.id,
            url: destination.url.clone(),
            method: destination.http_method.clone(),
            outcome,
            elapsed_ms: started.elapsed().as_millis() as u64,
        }
    }

    /// Execute one request and check the response status.
    async fn send(
        &self,
        method: HttpMethod,
        payload: &Value,
        destination: &Destination,
    ) -> Result<u16, DeliveryError> {
        let request = build_request(
            &self.client,
            method,
            &destination.url,
            &destination.headers,
            payload,
        )?;

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::HttpStatus(status.as_u16()));
        }

        tracing::debug!(
            destination_id = destination.id,
            status = status.as_u16(),
            "Delivered payload",
        );
        Ok(status.as_u16())
    }
}
