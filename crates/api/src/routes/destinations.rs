use axum::routing::get;
use axum::Router;

use crate::handlers::destinations;
use crate::state::AppState;

/// Destination routes mounted at `/destinations`.
///
/// ```text
/// GET    /                        -> list_destinations
/// POST   /                        -> create_destination
/// GET    /accounts/{account_id}   -> list_account_destinations
/// GET    /{id}                    -> get_destination
/// PUT    /{id}                    -> update_destination
/// DELETE /{id}                    -> delete_destination
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(destinations::list_destinations).post(destinations::create_destination),
        )
        .route(
            "/accounts/{account_id}",
            get(destinations::list_account_destinations),
        )
        .route(
            "/{id}",
            get(destinations::get_destination)
                .put(destinations::update_destination)
                .delete(destinations::delete_destination),
        )
}
