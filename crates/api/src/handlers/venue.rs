//! Handlers for venue availability slots.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use eventdesk_core::types::DbId;
use eventdesk_db::models::venue::{NewVenueSlot, VenueSlot, VenueSlotPatch};
use eventdesk_db::repositories::VenueRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// GET /venues/{venue_id}/slots
pub async fn list_slots(
    State(state): State<AppState>,
    Path(venue_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<VenueSlot>>>> {
    let slots = VenueRepo::list_slots_for_venue(&state.pool, venue_id).await?;
    Ok(Json(DataResponse { data: slots }))
}

/// POST /venues/{venue_id}/slots
///
/// Returns 409 if the venue already has a slot on that date.
pub async fn create_slot(
    State(state): State<AppState>,
    Path(venue_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<NewVenueSlot>,
) -> AppResult<(StatusCode, Json<DataResponse<VenueSlot>>)> {
    let slot = VenueRepo::create_slot(&state.pool, venue_id, &input).await?;

    tracing::info!(
        slot_id = %slot.slot_id,
        %venue_id,
        slot_date = %slot.slot_date,
        status = %slot.status,
        "Venue slot created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: slot })))
}

/// PUT /venues/slots/{slot_id}
pub async fn update_slot(
    State(state): State<AppState>,
    Path(slot_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<VenueSlotPatch>,
) -> AppResult<Json<DataResponse<VenueSlot>>> {
    let slot = VenueRepo::update_slot(&state.pool, slot_id, &input)
        .await?
        .ok_or(AppError::not_found("VenueSlot", slot_id))?;

    tracing::info!(%slot_id, status = %slot.status, "Venue slot updated");

    Ok(Json(DataResponse { data: slot }))
}

/// DELETE /venues/slots/{slot_id}
pub async fn delete_slot(
    State(state): State<AppState>,
    Path(slot_id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !VenueRepo::delete_slot(&state.pool, slot_id).await? {
        return Err(AppError::not_found("VenueSlot", slot_id));
    }

    tracing::info!(%slot_id, "Venue slot deleted");

    Ok(Json(MessageResponse::new("Venue slot deleted successfully")))
}
