//! Route definitions for the `/budgets` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::budget;
use crate::state::AppState;

/// Routes mounted at `/budgets`.
///
/// ```text
/// POST   /create-budget            -> create
/// GET    /find-all                 -> list
/// GET    /find-one/{id}            -> get_by_id
/// GET    /by-event/{event_id}      -> list_for_event
/// PUT    /update-budget/{id}       -> update
/// DELETE /delete-budget/{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-budget", post(budget::create))
        .route("/find-all", get(budget::list))
        .route("/find-one/{id}", get(budget::get_by_id))
        .route("/by-event/{event_id}", get(budget::list_for_event))
        .route("/update-budget/{id}", put(budget::update))
        .route("/delete-budget/{id}", delete(budget::delete))
}
