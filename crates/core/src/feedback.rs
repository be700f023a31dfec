//! Event feedback payloads and validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::DbId;
use crate::validation;

/// Lowest accepted rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted rating.
pub const MAX_RATING: i32 = 5;

/// Payload for submitting feedback on an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewFeedback {
    #[validate(required(message = "event_id is required"))]
    pub event_id: Option<DbId>,

    #[validate(required(message = "user_id is required"))]
    pub user_id: Option<DbId>,

    #[validate(
        required(message = "rating is required"),
        range(min = MIN_RATING, max = MAX_RATING, message = "rating must be between 1 and 5")
    )]
    pub rating: Option<i32>,

    #[validate(
        required(message = "comments are required"),
        length(min = 1, message = "comments must not be empty")
    )]
    pub comments: Option<String>,
}

/// Partial update for feedback.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FeedbackPatch {
    #[validate(range(
        min = MIN_RATING,
        max = MAX_RATING,
        message = "rating must be between 1 and 5"
    ))]
    pub rating: Option<i32>,

    #[validate(length(min = 1, message = "comments must not be empty"))]
    pub comments: Option<String>,
}

/// Aggregated ratings for one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSummary {
    pub event_id: DbId,
    pub count: i64,
    /// `None` when the event has no feedback yet.
    pub average_rating: Option<f64>,
}

pub fn validate(input: &NewFeedback) -> Vec<String> {
    validation::messages(input)
}

pub fn validate_patch(input: &FeedbackPatch) -> Vec<String> {
    validation::messages(input)
}
