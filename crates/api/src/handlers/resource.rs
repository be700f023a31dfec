//! Handlers for the `/resources` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use eventdesk_core::types::DbId;
use eventdesk_db::models::resource::{
    NewResource, Resource, ResourcePatch, ResourceWithEventResources,
};
use eventdesk_db::repositories::ResourceRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /resources/create-resource
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewResource>,
) -> AppResult<(StatusCode, Json<DataResponse<Resource>>)> {
    let resource = ResourceRepo::create(&state.pool, &input).await?;

    tracing::info!(resource_id = %resource.resource_id, "Resource created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: resource })))
}

/// GET /resources/find-all
///
/// Every resource with its event allocations.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ResourceWithEventResources>>>> {
    let resources = ResourceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: resources }))
}

/// GET /resources/find-one/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ResourceWithEventResources>>> {
    let resource = ResourceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Resource", id))?;
    Ok(Json(DataResponse { data: resource }))
}

/// PUT /resources/update-resource/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<ResourcePatch>,
) -> AppResult<Json<DataResponse<Resource>>> {
    let resource = ResourceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Resource", id))?;

    tracing::info!(resource_id = %id, "Resource updated");

    Ok(Json(DataResponse { data: resource }))
}

/// DELETE /resources/delete-resource/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ResourceRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Resource", id));
    }

    tracing::info!(resource_id = %id, "Resource deleted");

    Ok(Json(MessageResponse::new("Resource deleted successfully")))
}
