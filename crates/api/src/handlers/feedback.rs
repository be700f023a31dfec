//! Handlers for the `/feedback` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use eventdesk_core::types::DbId;
use eventdesk_db::models::feedback::{Feedback, FeedbackPatch, NewFeedback, RatingSummary};
use eventdesk_db::repositories::FeedbackRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /feedback
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewFeedback>,
) -> AppResult<(StatusCode, Json<DataResponse<Feedback>>)> {
    let feedback = FeedbackRepo::create(&state.pool, &input).await?;

    tracing::info!(
        feedback_id = %feedback.feedback_id,
        event_id = %feedback.event_id,
        rating = feedback.rating,
        "Feedback submitted",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: feedback })))
}

/// GET /feedback/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Feedback>>> {
    let feedback = FeedbackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Feedback", id))?;
    Ok(Json(DataResponse { data: feedback }))
}

/// GET /feedback/event/{event_id}
pub async fn list_for_event(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Feedback>>>> {
    let feedback = FeedbackRepo::list_for_event(&state.pool, event_id).await?;
    Ok(Json(DataResponse { data: feedback }))
}

/// GET /feedback/event/{event_id}/summary
pub async fn summary(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<Json<DataResponse<RatingSummary>>> {
    let summary = FeedbackRepo::rating_summary(&state.pool, event_id).await?;
    Ok(Json(DataResponse { data: summary }))
}

/// PUT /feedback/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<FeedbackPatch>,
) -> AppResult<Json<DataResponse<Feedback>>> {
    let feedback = FeedbackRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Feedback", id))?;

    tracing::info!(feedback_id = %id, "Feedback updated");

    Ok(Json(DataResponse { data: feedback }))
}

/// DELETE /feedback/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !FeedbackRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::not_found("Feedback", id));
    }

    tracing::info!(feedback_id = %id, "Feedback deleted");

    Ok(Json(MessageResponse::new("Feedback deleted successfully")))
}
