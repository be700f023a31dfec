//! Allocation of a resource to an event.

use eventdesk_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

pub use eventdesk_core::event_resource::{EventResourcePatch, NewEventResource};

/// A row from the `event_resources` table. Belongs to one `resources` row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventResource {
    pub event_resource_id: DbId,
    pub event_id: DbId,
    pub resource_id: DbId,
    pub quantity: i32,
    pub amount_spent: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
