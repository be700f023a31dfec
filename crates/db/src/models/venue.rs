//! Venue availability and event-venue booking models.

use chrono::NaiveDate;
use eventdesk_core::types::{DbId, Timestamp};
use eventdesk_core::venue::HourRange;
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

pub use eventdesk_core::venue::{NewVenueSlot, SlotStatus, VenueSlotPatch};

/// A row from the `venue_availability_slots` table.
///
/// `status` is read back as text (`available`, `booked`, `blocked`); use
/// [`SlotStatus::parse`] for a typed value.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueSlot {
    pub slot_id: DbId,
    pub venue_id: DbId,
    pub slot_date: NaiveDate,
    pub status: String,
    pub booked_hours: Json<Vec<HourRange>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `event_venues` junction table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventVenue {
    pub event_venue_id: DbId,
    pub event_id: DbId,
    pub venue_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `event_venue_bookings` junction table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventVenueBooking {
    pub booking_id: DbId,
    pub event_venue_id: DbId,
    pub slot_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
