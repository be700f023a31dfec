//! Allocation of a resource to an event.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;
use crate::validation;

/// Payload for allocating a resource to an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewEventResource {
    #[validate(required(message = "event_id is required"))]
    pub event_id: Option<DbId>,

    #[validate(required(message = "resource_id is required"))]
    pub resource_id: Option<DbId>,

    #[validate(
        required(message = "quantity is required"),
        range(min = 1, message = "quantity must be at least 1")
    )]
    pub quantity: Option<i32>,

    #[validate(range(exclusive_min = 0.0, message = "amount_spent must be a positive number"))]
    pub amount_spent: Option<f64>,
}

/// Partial update for an allocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EventResourcePatch {
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: Option<i32>,

    #[validate(range(exclusive_min = 0.0, message = "amount_spent must be a positive number"))]
    pub amount_spent: Option<f64>,
}

pub fn validate(input: &NewEventResource) -> Vec<String> {
    validation::messages(input)
}

pub fn validate_patch(input: &EventResourcePatch) -> Vec<String> {
    validation::messages(input)
}
