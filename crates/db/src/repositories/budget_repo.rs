//! Repository for the `budgets` table.

use eventdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::budget::{Budget, BudgetPatch, NewBudget};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "budget_id, event_id, expected_amount, income, expenditure, notes, \
                       created_at, updated_at";

/// Provides CRUD operations for event budgets.
pub struct BudgetRepo;

impl BudgetRepo {
    /// Insert a new budget, returning the created row.
    ///
    /// `income` and `expenditure` default to 0 when not provided.
    pub async fn create(pool: &PgPool, input: &NewBudget) -> Result<Budget, sqlx::Error> {
        let query = format!(
            "INSERT INTO budgets (event_id, expected_amount, income, expenditure, notes)
             VALUES ($1, $2, COALESCE($3, 0), COALESCE($4, 0), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Budget>(&query)
            .bind(input.event_id)
            .bind(input.expected_amount)
            .bind(input.income)
            .bind(input.expenditure)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// List all budgets, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Budget>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM budgets ORDER BY created_at DESC");
        sqlx::query_as::<_, Budget>(&query).fetch_all(pool).await
    }

    /// Find a budget by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Budget>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM budgets WHERE budget_id = $1");
        sqlx::query_as::<_, Budget>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List budgets belonging to one event.
    pub async fn list_for_event(pool: &PgPool, event_id: DbId) -> Result<Vec<Budget>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM budgets WHERE event_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Budget>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Update a budget. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &BudgetPatch,
    ) -> Result<Option<Budget>, sqlx::Error> {
        let query = format!(
            "UPDATE budgets SET
                expected_amount = COALESCE($2, expected_amount),
                income = COALESCE($3, income),
                expenditure = COALESCE($4, expenditure),
                notes = COALESCE($5, notes)
             WHERE budget_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Budget>(&query)
            .bind(id)
            .bind(input.expected_amount)
            .bind(input.income)
            .bind(input.expenditure)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a budget by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM budgets WHERE budget_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }
}
