use axum::routing::get;
use axum::Router;

use crate::handlers::accounts;
use crate::state::AppState;

/// Account routes mounted at `/accounts`.
///
/// ```text
/// GET    /       -> list_accounts
/// POST   /       -> create_account
/// GET    /{id}   -> get_account
/// PUT    /{id}   -> update_account
/// DELETE /{id}   -> delete_account
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(accounts::list_accounts).post(accounts::create_account),
        )
        .route(
            "/{id}",
            get(accounts::get_account)
                .put(accounts::update_account)
                .delete(accounts::delete_account),
        )
}
