//! Budget entity model.

use eventdesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

pub use eventdesk_core::budget::{BudgetPatch, NewBudget};

/// A row from the `budgets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Budget {
    pub budget_id: DbId,
    pub event_id: DbId,
    pub expected_amount: f64,
    pub income: f64,
    pub expenditure: f64,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
