//! In-app notification payloads and validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Timestamp};
use crate::validation;

/// Maximum notification message length, in characters.
pub const MAX_MESSAGE_LENGTH: u64 = 2000;

/// Payload for creating a notification. `sent_at` defaults to now.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewNotification {
    #[validate(required(message = "user_id is required"))]
    pub user_id: Option<DbId>,

    pub event_id: Option<DbId>,

    #[validate(
        required(message = "message is required"),
        length(
            min = 1,
            max = MAX_MESSAGE_LENGTH,
            message = "message must be between 1 and 2000 characters"
        )
    )]
    pub message: Option<String>,

    pub sent_at: Option<Timestamp>,
}

pub fn validate(input: &NewNotification) -> Vec<String> {
    validation::messages(input)
}
