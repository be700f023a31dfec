//! Route definitions for the `/feedback` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Routes mounted at `/feedback`.
///
/// ```text
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete (soft)
/// GET    /event/{event_id}          -> list_for_event
/// GET    /event/{event_id}/summary  -> summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(feedback::create))
        .route(
            "/{id}",
            get(feedback::get_by_id)
                .put(feedback::update)
                .delete(feedback::delete),
        )
        .route("/event/{event_id}", get(feedback::list_for_event))
        .route("/event/{event_id}/summary", get(feedback::summary))
}
