//! Feedback entity model.

use eventdesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

pub use eventdesk_core::feedback::{FeedbackPatch, NewFeedback, RatingSummary};

/// A row from the `feedback` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub feedback_id: DbId,
    pub event_id: DbId,
    pub user_id: DbId,
    pub rating: i32,
    pub comments: String,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
