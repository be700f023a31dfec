use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Mount health check routes.
///
/// ```text
/// GET    /health/status     -> status
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/health/status", get(health::status))
}
