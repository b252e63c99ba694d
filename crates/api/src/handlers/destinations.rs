//! Handlers for destination management.

use axum::extract::{Path, State};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;
use datapusher_core::error::CoreError;
use datapusher_core::types::DbId;
use datapusher_db::models::destination::{CreateDestination, HeaderMapping, UpdateDestination};
use datapusher_db::repositories::{AccountRepo, DestinationRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Reject header mappings that could never be sent on the wire.
fn validate_headers(headers: &HeaderMapping) -> AppResult<()> {
    for (name, value) in headers {
        if HeaderName::from_bytes(name.as_bytes()).is_err() {
            return Err(CoreError::Validation(format!("invalid header name: {name}")).into());
        }
        if HeaderValue::from_str(value).is_err() {
            return Err(CoreError::Validation(format!("invalid value for header: {name}")).into());
        }
    }
    Ok(())
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Destination",
        id,
    })
}

/// POST /destinations
///
/// Register a destination for an existing account.
pub async fn create_destination(
    State(state): State<AppState>,
    Json(input): Json<CreateDestination>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_headers(&input.headers)?;

    AccountRepo::find_by_id(&state.pool, input.account_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Account",
            id: input.account_id,
        }))?;

    let destination = DestinationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        destination_id = destination.id,
        account_id = destination.account_id,
        method = %destination.http_method,
        url = %destination.url,
        "Destination created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: destination })))
}

/// GET /destinations
pub async fn list_destinations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let destinations = DestinationRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: destinations }))
}

/// GET /destinations/accounts/{account_id}
///
/// An account with no destinations yields an empty list, not 404.
pub async fn list_account_destinations(
    State(state): State<AppState>,
    Path(account_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let destinations = DestinationRepo::list_by_account(&state.pool, account_id).await?;
    Ok(Json(DataResponse { data: destinations }))
}

/// GET /destinations/{id}
pub async fn get_destination(
    State(state): State<AppState>,
    Path(destination_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let destination = DestinationRepo::find_by_id(&state.pool, destination_id)
        .await?
        .ok_or_else(|| not_found(destination_id))?;

    Ok(Json(DataResponse { data: destination }))
}

/// PUT /destinations/{id}
pub async fn update_destination(
    State(state): State<AppState>,
    Path(destination_id): Path<DbId>,
    Json(input): Json<UpdateDestination>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(headers) = &input.headers {
        validate_headers(headers)?;
    }

    let destination = DestinationRepo::update(&state.pool, destination_id, &input)
        .await?
        .ok_or_else(|| not_found(destination_id))?;

    tracing::info!(destination_id = destination.id, "Destination updated");

    Ok(Json(DataResponse { data: destination }))
}

/// DELETE /destinations/{id}
pub async fn delete_destination(
    State(state): State<AppState>,
    Path(destination_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let destination = DestinationRepo::delete(&state.pool, destination_id)
        .await?
        .ok_or_else(|| not_found(destination_id))?;

    tracing::info!(
        destination_id = destination.id,
        account_id = destination.account_id,
        "Destination deleted",
    );

    Ok(Json(DataResponse { data: destination }))
}
