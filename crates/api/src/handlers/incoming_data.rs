//! The ingress endpoint producers push JSON payloads to.
//!
//! The account is resolved from its token before the body is read, so an
//! unauthenticated request never has its payload parsed or dispatched.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;
use datapusher_db::repositories::DestinationRepo;
use datapusher_dispatch::DeliveryOutcome;

use crate::error::{AppError, AppResult};
use crate::middleware::account_token::AccountToken;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /server/incoming_data
///
/// Fan the payload out to every destination of the authenticated account
/// and answer once all deliveries have finished. Per-destination failures
/// are logged, never surfaced to the producer.
pub async fn receive(
    AccountToken(account): AccountToken,
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let payload: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON payload: {e}")))?;

    let destinations = DestinationRepo::list_by_account(&state.pool, account.id).await?;

    let report = state.dispatcher.dispatch(&payload, &destinations).await;

    for result in &report.results {
        match &result.outcome {
            DeliveryOutcome::Delivered { .. } => {}
            DeliveryOutcome::Skipped { reason } => tracing::warn!(
                account_id = account.id,
                destination_id = result.destination_id,
                method = %result.method,
                reason = %reason,
                "Destination skipped",
            ),
            outcome => tracing::warn!(
                account_id = account.id,
                destination_id = result.destination_id,
                url = %result.url,
                method = %result.method,
                elapsed_ms = result.elapsed_ms,
                outcome = ?outcome,
                "Destination not delivered",
            ),
        }
    }

    tracing::info!(
        account_id = account.id,
        destinations = report.total(),
        delivered = report.delivered_count(),
        failed = report.failed_count(),
        skipped = report.skipped_count(),
        "Payload dispatched",
    );

    Ok(Json(MessageResponse::new("Success")))
}
