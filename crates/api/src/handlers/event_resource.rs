//! Handlers for the `/event-resources` resource (resource allocations per
//! event).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use eventdesk_core::types::DbId;
use eventdesk_db::models::event_resource::{EventResource, EventResourcePatch, NewEventResource};
use eventdesk_db::repositories::EventResourceRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /event-resources/create-event-resource
///
/// An unknown `resource_id` is rejected with 400 by the foreign key.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewEventResource>,
) -> AppResult<(StatusCode, Json<DataResponse<EventResource>>)> {
    let allocation = EventResourceRepo::create(&state.pool, &input).await?;

    tracing::info!(
        event_resource_id = %allocation.event_resource_id,
        event_id = %allocation.event_id,
        resource_id = %allocation.resource_id,
        quantity = allocation.quantity,
        "Resource allocated to event",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: allocation })))
}

/// GET /event-resources/find-all
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<EventResource>>>> {
    let allocations = EventResourceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: allocations }))
}

/// GET /event-resources/find-one/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<EventResource>>> {
    let allocation = EventResourceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("EventResource", id))?;
    Ok(Json(DataResponse { data: allocation }))
}

/// GET /event-resources/by-event/{event_id}
pub async fn list_for_event(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<EventResource>>>> {
    let allocations = EventResourceRepo::list_for_event(&state.pool, event_id).await?;
    Ok(Json(DataResponse { data: allocations }))
}

/// PUT /event-resources/update-event-resource/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<EventResourcePatch>,
) -> AppResult<Json<DataResponse<EventResource>>> {
    let allocation = EventResourceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("EventResource", id))?;

    tracing::info!(event_resource_id = %id, "Event resource updated");

    Ok(Json(DataResponse { data: allocation }))
}

/// DELETE /event-resources/delete-event-resource/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !EventResourceRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("EventResource", id));
    }

    tracing::info!(event_resource_id = %id, "Event resource deleted");

    Ok(Json(MessageResponse::new("Event resource deleted successfully")))
}
