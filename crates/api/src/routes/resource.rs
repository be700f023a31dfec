//! Route definitions for the `/resources` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::resource;
use crate::state::AppState;

/// Routes mounted at `/resources`.
///
/// ```text
/// POST   /create-resource          -> create
/// GET    /find-all                 -> list
/// GET    /find-one/{id}            -> get_by_id
/// PUT    /update-resource/{id}     -> update
/// DELETE /delete-resource/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-resource", post(resource::create))
        .route("/find-all", get(resource::list))
        .route("/find-one/{id}", get(resource::get_by_id))
        .route("/update-resource/{id}", put(resource::update))
        .route("/delete-resource/{id}", delete(resource::delete))
}
