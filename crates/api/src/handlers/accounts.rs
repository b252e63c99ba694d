//! Handlers for account management.
//!
//! Accounts own an ingress token, generated here at creation time and
//! returned in the response body so the producer can store it.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;
use datapusher_core::error::CoreError;
use datapusher_core::tokens::generate_account_token;
use datapusher_core::types::DbId;
use datapusher_db::models::account::{CreateAccount, UpdateAccount};
use datapusher_db::repositories::AccountRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Message returned when an account is created with an email already in use.
pub const EMAIL_TAKEN_MESSAGE: &str = "Email already registered";

/// POST /accounts
///
/// Create an account and issue its token.
pub async fn create_account(
    State(state): State<AppState>,
    Json(input): Json<CreateAccount>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    if AccountRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::BadRequest(EMAIL_TAKEN_MESSAGE.to_string()));
    }

    let token = generate_account_token();
    let account = AccountRepo::create(&state.pool, &input, &token).await?;

    tracing::info!(
        account_id = account.id,
        email = %account.email,
        "Account created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: account })))
}

/// GET /accounts
pub async fn list_accounts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let accounts = AccountRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: accounts }))
}

/// GET /accounts/{id}
pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let account = AccountRepo::find_by_id(&state.pool, account_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Account",
            id: account_id,
        }))?;

    Ok(Json(DataResponse { data: account }))
}

/// PUT /accounts/{id}
///
/// Partially update email, name or website. The token is never changed.
pub async fn update_account(
    State(state): State<AppState>,
    Path(account_id): Path<DbId>,
    Json(input): Json<UpdateAccount>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    if let Some(email) = &input.email {
        if let Some(existing) = AccountRepo::find_by_email(&state.pool, email).await? {
            if existing.id != account_id {
                return Err(AppError::BadRequest(EMAIL_TAKEN_MESSAGE.to_string()));
            }
        }
    }

    let account = AccountRepo::update(&state.pool, account_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Account",
            id: account_id,
        }))?;

    tracing::info!(account_id = account.id, "Account updated");

    Ok(Json(DataResponse { data: account }))
}

/// DELETE /accounts/{id}
///
/// Deleting an account removes its destinations and invalidates its token.
pub async fn delete_account(
    State(state): State<AppState>,
    Path(account_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let account = AccountRepo::delete(&state.pool, account_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Account",
            id: account_id,
        }))?;

    tracing::info!(account_id = account.id, "Account deleted");

    Ok(Json(DataResponse { data: account }))
}
