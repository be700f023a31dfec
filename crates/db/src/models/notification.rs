//! Notification entity model.

use eventdesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

pub use eventdesk_core::notification::NewNotification;

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub notification_id: DbId,
    pub user_id: DbId,
    pub event_id: Option<DbId>,
    pub message: String,
    pub sent_at: Timestamp,
    pub is_read: bool,
    pub is_disabled: bool,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
