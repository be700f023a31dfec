//! Route definitions for the `/registrations` resource.

use axum::routing::any;
use axum::Router;

use crate::handlers::registration;
use crate::state::AppState;

/// Routes mounted at `/registrations`. Every path and method answers 501.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", any(registration::not_implemented))
        .route("/{*rest}", any(registration::not_implemented))
}
