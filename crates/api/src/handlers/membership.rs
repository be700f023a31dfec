//! Handlers for the composite-key associations `/organization-users` and
//! `/user-roles`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use eventdesk_core::error::CoreError;
use eventdesk_core::types::DbId;
use eventdesk_db::models::membership::{
    NewOrganizationUser, NewUserRole, OrganizationUser, UserRole,
};
use eventdesk_db::repositories::{OrganizationUserRepo, UserRoleRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Organization membership
// ---------------------------------------------------------------------------

/// POST /organization-users
///
/// Returns 409 if the user already belongs to the organization.
pub async fn add_organization_user(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewOrganizationUser>,
) -> AppResult<(StatusCode, Json<DataResponse<OrganizationUser>>)> {
    let membership = OrganizationUserRepo::add(&state.pool, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "User is already a member of this organization".into(),
            ))
        })?;

    tracing::info!(
        organization_id = %membership.organization_id,
        user_id = %membership.user_id,
        "User added to organization",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: membership })))
}

/// GET /organization-users/organization/{organization_id}
pub async fn list_organization_members(
    State(state): State<AppState>,
    Path(organization_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<OrganizationUser>>>> {
    let members = OrganizationUserRepo::list_for_organization(&state.pool, organization_id).await?;
    Ok(Json(DataResponse { data: members }))
}

/// GET /organization-users/user/{user_id}
pub async fn list_user_organizations(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<OrganizationUser>>>> {
    let memberships = OrganizationUserRepo::list_for_user(&state.pool, user_id).await?;
    Ok(Json(DataResponse { data: memberships }))
}

/// DELETE /organization-users/{organization_id}/{user_id}
pub async fn remove_organization_user(
    State(state): State<AppState>,
    Path((organization_id, user_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    if !OrganizationUserRepo::remove(&state.pool, organization_id, user_id).await? {
        return Err(AppError::link_not_found(
            "OrganizationUser",
            ("organization_id", organization_id),
            ("user_id", user_id),
        ));
    }

    tracing::info!(%organization_id, %user_id, "User removed from organization");

    Ok(Json(MessageResponse::new("User removed from organization")))
}

// ---------------------------------------------------------------------------
// Role assignment
// ---------------------------------------------------------------------------

/// POST /user-roles
///
/// Returns 409 if the role is already assigned.
pub async fn assign_role(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewUserRole>,
) -> AppResult<(StatusCode, Json<DataResponse<UserRole>>)> {
    let assignment = UserRoleRepo::add(&state.pool, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Role is already assigned to this user".into(),
            ))
        })?;

    tracing::info!(
        user_id = %assignment.user_id,
        role_id = %assignment.role_id,
        "Role assigned",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: assignment })))
}

/// GET /user-roles/user/{user_id}
pub async fn list_user_roles(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<UserRole>>>> {
    let roles = UserRoleRepo::list_for_user(&state.pool, user_id).await?;
    Ok(Json(DataResponse { data: roles }))
}

/// GET /user-roles/role/{role_id}
pub async fn list_role_holders(
    State(state): State<AppState>,
    Path(role_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<UserRole>>>> {
    let holders = UserRoleRepo::list_for_role(&state.pool, role_id).await?;
    Ok(Json(DataResponse { data: holders }))
}

/// DELETE /user-roles/{user_id}/{role_id}
pub async fn revoke_role(
    State(state): State<AppState>,
    Path((user_id, role_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    if !UserRoleRepo::remove(&state.pool, user_id, role_id).await? {
        return Err(AppError::link_not_found(
            "UserRole",
            ("user_id", user_id),
            ("role_id", role_id),
        ));
    }

    tracing::info!(%user_id, %role_id, "Role revoked");

    Ok(Json(MessageResponse::new("Role revoked")))
}
