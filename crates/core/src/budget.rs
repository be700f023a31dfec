//! Per-event budget payloads and validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;
use crate::validation;

/// Maximum length of budget notes, in characters.
pub const MAX_NOTES_LENGTH: u64 = 1000;

/// Payload for creating a budget. `income` and `expenditure` default to 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewBudget {
    #[validate(required(message = "event_id is required"))]
    pub event_id: Option<DbId>,

    #[validate(
        required(message = "expected_amount is required"),
        range(min = 0.0, message = "expected_amount must not be negative")
    )]
    pub expected_amount: Option<f64>,

    #[validate(range(min = 0.0, message = "income must not be negative"))]
    pub income: Option<f64>,

    #[validate(range(min = 0.0, message = "expenditure must not be negative"))]
    pub expenditure: Option<f64>,

    #[validate(length(max = MAX_NOTES_LENGTH, message = "notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}

/// Partial update for a budget.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct BudgetPatch {
    #[validate(range(min = 0.0, message = "expected_amount must not be negative"))]
    pub expected_amount: Option<f64>,

    #[validate(range(min = 0.0, message = "income must not be negative"))]
    pub income: Option<f64>,

    #[validate(range(min = 0.0, message = "expenditure must not be negative"))]
    pub expenditure: Option<f64>,

    #[validate(length(max = MAX_NOTES_LENGTH, message = "notes must be at most 1000 characters"))]
    pub notes: Option<String>,
}

pub fn validate(input: &NewBudget) -> Vec<String> {
    validation::messages(input)
}

pub fn validate_patch(input: &BudgetPatch) -> Vec<String> {
    validation::messages(input)
}
