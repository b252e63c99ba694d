//! Token-based account resolution for the ingress endpoint.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use datapusher_core::tokens::{normalize_token, TOKEN_HEADER};
use datapusher_db::models::account::Account;
use datapusher_db::repositories::AccountRepo;

use crate::error::AppError;
use crate::state::AppState;

/// The account owning the token sent in the `CL-X-TOKEN` header.
///
/// A missing header, a blank or non-UTF-8 value and an unknown token all
/// reject with [`AppError::Unauthenticated`]; callers cannot tell them apart.
///
/// ```ignore
/// async fn my_handler(AccountToken(account): AccountToken) -> AppResult<Json<()>> {
///     tracing::info!(account_id = account.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AccountToken(pub Account);

impl FromRequestParts<AppState> for AccountToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(normalize_token)
            .ok_or(AppError::Unauthenticated)?;

        let account = AccountRepo::find_by_token(&state.pool, token)
            .await?
            .ok_or(AppError::Unauthenticated)?;

        Ok(AccountToken(account))
    }
}
