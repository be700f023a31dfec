//! Handlers for the `/notifications` resource.
//!
//! Notifications are stored in-app records; creating one also hands the
//! message to the configured [`NotificationService`] for delivery.
//! Delivery is best-effort: a failure is logged and the stored record is
//! still returned.
//!
//! [`NotificationService`]: eventdesk_core::services::NotificationService

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use eventdesk_core::types::DbId;
use eventdesk_db::models::notification::{NewNotification, Notification};
use eventdesk_db::repositories::NotificationRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::query::IncludeDisabledParams;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /notifications
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewNotification>,
) -> AppResult<(StatusCode, Json<DataResponse<Notification>>)> {
    let notification = NotificationRepo::create(&state.pool, &input).await?;

    let delivered = match state
        .notifier
        .send_notification(notification.user_id, &notification.message)
        .await
    {
        Ok(delivered) => delivered,
        Err(e) => {
            tracing::warn!(
                error = %e,
                notification_id = %notification.notification_id,
                "Notification delivery failed",
            );
            false
        }
    };

    tracing::info!(
        notification_id = %notification.notification_id,
        user_id = %notification.user_id,
        delivered,
        "Notification created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: notification })))
}

/// GET /notifications/user/{user_id}?include_disabled=
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Query(params): Query<IncludeDisabledParams>,
) -> AppResult<Json<DataResponse<Vec<Notification>>>> {
    let notifications =
        NotificationRepo::list_for_user(&state.pool, user_id, params.include_disabled).await?;
    Ok(Json(DataResponse {
        data: notifications,
    }))
}

/// GET /notifications/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Notification>>> {
    let notification = NotificationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Notification", id))?;
    Ok(Json(DataResponse { data: notification }))
}

/// PUT /notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Notification>>> {
    let notification = NotificationRepo::mark_read(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Notification", id))?;
    Ok(Json(DataResponse { data: notification }))
}

/// PUT /notifications/{id}/disable
pub async fn disable(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Notification>>> {
    let notification = NotificationRepo::set_disabled(&state.pool, id, true)
        .await?
        .ok_or(AppError::not_found("Notification", id))?;

    tracing::info!(notification_id = %id, "Notification disabled");

    Ok(Json(DataResponse { data: notification }))
}

/// DELETE /notifications/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !NotificationRepo::soft_delete(&state.pool, id).await? {
        return Err(AppError::not_found("Notification", id));
    }

    tracing::info!(notification_id = %id, "Notification deleted");

    Ok(Json(MessageResponse::new("Notification deleted successfully")))
}
