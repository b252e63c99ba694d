use axum::routing::post;
use axum::Router;

use crate::handlers::incoming_data;
use crate::state::AppState;

/// Ingress route. Producers in the field post to both path forms.
///
/// ```text
/// POST /server/incoming_data    -> receive
/// POST /server/incoming_data/   -> receive
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/server/incoming_data", post(incoming_data::receive))
        .route("/server/incoming_data/", post(incoming_data::receive))
}
