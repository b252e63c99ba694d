pub mod accounts;
pub mod destinations;
pub mod health;
pub mod incoming_data;

use axum::Router;

use crate::state::AppState;

/// Management routes, mounted at the root and subject to the request timeout.
///
/// ```text
/// /health                              service + database health
///
/// /accounts                            list, create
/// /accounts/{id}                       get, update, delete
///
/// /destinations                        list, create
/// /destinations/accounts/{account_id}  list for one account
/// /destinations/{id}                   get, update, delete
/// ```
///
/// The ingress route lives in [`incoming_data::router`] and is mounted
/// separately: a fan-out is only bounded by the per-delivery timeout times
/// the number of delivery waves.
pub fn management_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/accounts", accounts::router())
        .nest("/destinations", destinations::router())
}
