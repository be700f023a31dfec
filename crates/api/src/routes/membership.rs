//! Route definitions for `/organization-users` and `/user-roles`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::membership;
use crate::state::AppState;

/// Routes mounted at `/organization-users`.
///
/// ```text
/// POST   /                                   -> add_organization_user
/// GET    /organization/{organization_id}     -> list_organization_members
/// GET    /user/{user_id}                     -> list_user_organizations
/// DELETE /{organization_id}/{user_id}        -> remove_organization_user
/// ```
pub fn organization_users_router() -> Router<AppState> {
    Router::new()
        .route("/", post(membership::add_organization_user))
        .route(
            "/organization/{organization_id}",
            get(membership::list_organization_members),
        )
        .route("/user/{user_id}", get(membership::list_user_organizations))
        .route(
            "/{organization_id}/{user_id}",
            delete(membership::remove_organization_user),
        )
}

/// Routes mounted at `/user-roles`.
///
/// ```text
/// POST   /                        -> assign_role
/// GET    /user/{user_id}          -> list_user_roles
/// GET    /role/{role_id}          -> list_role_holders
/// DELETE /{user_id}/{role_id}     -> revoke_role
/// ```
pub fn user_roles_router() -> Router<AppState> {
    Router::new()
        .route("/", post(membership::assign_role))
        .route("/user/{user_id}", get(membership::list_user_roles))
        .route("/role/{role_id}", get(membership::list_role_holders))
        .route("/{user_id}/{role_id}", delete(membership::revoke_role))
}
