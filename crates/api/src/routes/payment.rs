//! Route definitions for the `/payments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::payment;
use crate::state::AppState;

/// Routes mounted at `/payments`.
///
/// ```text
/// GET    /{payment_id}     -> get_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{payment_id}", get(payment::get_status))
}
