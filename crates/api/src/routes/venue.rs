//! Route definitions for venue availability.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::venue;
use crate::state::AppState;

/// Routes mounted at `/venues`.
///
/// ```text
/// GET    /{venue_id}/slots     -> list_slots
/// POST   /{venue_id}/slots     -> create_slot
/// PUT    /slots/{slot_id}      -> update_slot
/// DELETE /slots/{slot_id}      -> delete_slot
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{venue_id}/slots",
            get(venue::list_slots).post(venue::create_slot),
        )
        .route(
            "/slots/{slot_id}",
            put(venue::update_slot).delete(venue::delete_slot),
        )
}
