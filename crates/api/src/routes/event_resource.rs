//! Route definitions for the `/event-resources` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::event_resource;
use crate::state::AppState;

/// Routes mounted at `/event-resources`.
///
/// ```text
/// POST   /create-event-resource        -> create
/// GET    /find-all                     -> list
/// GET    /find-one/{id}                -> get_by_id
/// GET    /by-event/{event_id}          -> list_for_event
/// PUT    /update-event-resource/{id}   -> update
/// DELETE /delete-event-resource/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-event-resource", post(event_resource::create))
        .route("/find-all", get(event_resource::list))
        .route("/find-one/{id}", get(event_resource::get_by_id))
        .route("/by-event/{event_id}", get(event_resource::list_for_event))
        .route("/update-event-resource/{id}", put(event_resource::update))
        .route("/delete-event-resource/{id}", delete(event_resource::delete))
}
