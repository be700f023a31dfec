//! Handlers for the `/payments` resource. Backed by the configured
//! [`PaymentService`](eventdesk_core::services::PaymentService).

use axum::extract::{Path, State};
use axum::Json;
use eventdesk_core::types::DbId;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PaymentStatusResponse {
    pub payment_id: DbId,
    pub status: String,
}

/// GET /payments/{payment_id}
pub async fn get_status(
    State(state): State<AppState>,
    Path(payment_id): Path<DbId>,
) -> AppResult<Json<DataResponse<PaymentStatusResponse>>> {
    let status = state.payments.payment_status(payment_id).await?;
    Ok(Json(DataResponse {
        data: PaymentStatusResponse { payment_id, status },
    }))
}
