//! Route definitions for the `/notifications` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// POST   /                    -> create
/// GET    /user/{user_id}      -> list_for_user (?include_disabled=true)
/// GET    /{id}                -> get_by_id
/// DELETE /{id}                -> delete (soft)
/// PUT    /{id}/read           -> mark_read
/// PUT    /{id}/disable        -> disable
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(notification::create))
        .route("/user/{user_id}", get(notification::list_for_user))
        .route(
            "/{id}",
            get(notification::get_by_id).delete(notification::delete),
        )
        .route("/{id}/read", put(notification::mark_read))
        .route("/{id}/disable", put(notification::disable))
}
