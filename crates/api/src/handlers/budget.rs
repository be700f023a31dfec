//! Handlers for the `/budgets` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use eventdesk_core::types::DbId;
use eventdesk_db::models::budget::{Budget, BudgetPatch, NewBudget};
use eventdesk_db::repositories::BudgetRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /budgets/create-budget
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<NewBudget>,
) -> AppResult<(StatusCode, Json<DataResponse<Budget>>)> {
    let budget = BudgetRepo::create(&state.pool, &input).await?;

    tracing::info!(
        budget_id = %budget.budget_id,
        event_id = %budget.event_id,
        "Budget created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: budget })))
}

/// GET /budgets/find-all
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Budget>>>> {
    let budgets = BudgetRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: budgets }))
}

/// GET /budgets/find-one/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Budget>>> {
    let budget = BudgetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Budget", id))?;
    Ok(Json(DataResponse { data: budget }))
}

/// GET /budgets/by-event/{event_id}
pub async fn list_for_event(
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Budget>>>> {
    let budgets = BudgetRepo::list_for_event(&state.pool, event_id).await?;
    Ok(Json(DataResponse { data: budgets }))
}

/// PUT /budgets/update-budget/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<BudgetPatch>,
) -> AppResult<Json<DataResponse<Budget>>> {
    let budget = BudgetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Budget", id))?;

    tracing::info!(budget_id = %id, "Budget updated");

    Ok(Json(DataResponse { data: budget }))
}

/// DELETE /budgets/delete-budget/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !BudgetRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Budget", id));
    }

    tracing::info!(budget_id = %id, "Budget deleted");

    Ok(Json(MessageResponse::new("Budget deleted successfully")))
}
