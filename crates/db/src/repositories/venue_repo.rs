//! Repository for venue availability slots and the event-venue junction
//! tables (`event_venues`, `event_venue_bookings`).

use eventdesk_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::venue::{EventVenue, EventVenueBooking, NewVenueSlot, VenueSlot, VenueSlotPatch};

/// Column list for `venue_availability_slots` queries. The enum column is
/// read back as text.
const SLOT_COLUMNS: &str = "slot_id, venue_id, slot_date, status::TEXT AS status, booked_hours, \
                            created_at, updated_at";

/// Column list for `event_venues` queries.
const EVENT_VENUE_COLUMNS: &str = "event_venue_id, event_id, venue_id, created_at, updated_at";

/// Column list for `event_venue_bookings` queries.
const BOOKING_COLUMNS: &str = "booking_id, event_venue_id, slot_id, created_at, updated_at";

/// Provides data access for venue availability and event-venue bookings.
pub struct VenueRepo;

impl VenueRepo {
    // -----------------------------------------------------------------------
    // Availability slots
    // -----------------------------------------------------------------------

    /// Open a slot for a venue. Status defaults to `available` and booked
    /// hours to an empty list.
    pub async fn create_slot(
        pool: &PgPool,
        venue_id: DbId,
        input: &NewVenueSlot,
    ) -> Result<VenueSlot, sqlx::Error> {
        let query = format!(
            "INSERT INTO venue_availability_slots (venue_id, slot_date, status, booked_hours)
             VALUES ($1, $2, COALESCE($3::venue_slot_status, 'available'), COALESCE($4, '[]'::JSONB))
             RETURNING {SLOT_COLUMNS}"
        );
        sqlx::query_as::<_, VenueSlot>(&query)
            .bind(venue_id)
            .bind(input.slot_date)
            .bind(&input.status)
            .bind(input.booked_hours.as_ref().map(Json))
            .fetch_one(pool)
            .await
    }

    /// List a venue's slots in date order.
    pub async fn list_slots_for_venue(
        pool: &PgPool,
        venue_id: DbId,
    ) -> Result<Vec<VenueSlot>, sqlx::Error> {
        let query = format!(
            "SELECT {SLOT_COLUMNS} FROM venue_availability_slots
             WHERE venue_id = $1
             ORDER BY slot_date"
        );
        sqlx::query_as::<_, VenueSlot>(&query)
            .bind(venue_id)
            .fetch_all(pool)
            .await
    }

    /// Find a slot by ID.
    pub async fn find_slot(pool: &PgPool, slot_id: DbId) -> Result<Option<VenueSlot>, sqlx::Error> {
        let query =
            format!("SELECT {SLOT_COLUMNS} FROM venue_availability_slots WHERE slot_id = $1");
        sqlx::query_as::<_, VenueSlot>(&query)
            .bind(slot_id)
            .fetch_optional(pool)
            .await
    }

    /// Update a slot's status and/or booked hours.
    ///
    /// Returns `None` if no row with the given `slot_id` exists.
    pub async fn update_slot(
        pool: &PgPool,
        slot_id: DbId,
        input: &VenueSlotPatch,
    ) -> Result<Option<VenueSlot>, sqlx::Error> {
        let query = format!(
            "UPDATE venue_availability_slots SET
                status = COALESCE($2::venue_slot_status, status),
                booked_hours = COALESCE($3, booked_hours)
             WHERE slot_id = $1
             RETURNING {SLOT_COLUMNS}"
        );
        sqlx::query_as::<_, VenueSlot>(&query)
            .bind(slot_id)
            .bind(&input.status)
            .bind(input.booked_hours.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Delete a slot. Bookings on it are removed by cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete_slot(pool: &PgPool, slot_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM venue_availability_slots WHERE slot_id = $1")
            .bind(slot_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }

    // -----------------------------------------------------------------------
    // Event venues and bookings
    // -----------------------------------------------------------------------

    /// Link a venue to an event.
    pub async fn link_event_venue(
        pool: &PgPool,
        event_id: DbId,
        venue_id: DbId,
    ) -> Result<EventVenue, sqlx::Error> {
        let query = format!(
            "INSERT INTO event_venues (event_id, venue_id)
             VALUES ($1, $2)
             RETURNING {EVENT_VENUE_COLUMNS}"
        );
        sqlx::query_as::<_, EventVenue>(&query)
            .bind(event_id)
            .bind(venue_id)
            .fetch_one(pool)
            .await
    }

    /// List the venues linked to an event.
    pub async fn list_event_venues(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<EventVenue>, sqlx::Error> {
        let query = format!(
            "SELECT {EVENT_VENUE_COLUMNS} FROM event_venues
             WHERE event_id = $1
             ORDER BY created_at"
        );
        sqlx::query_as::<_, EventVenue>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Unlink a venue from an event. Its bookings are removed by cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn unlink_event_venue(
        pool: &PgPool,
        event_venue_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM event_venues WHERE event_venue_id = $1")
            .bind(event_venue_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }

    /// Book a slot for an event venue.
    pub async fn book(
        pool: &PgPool,
        event_venue_id: DbId,
        slot_id: DbId,
    ) -> Result<EventVenueBooking, sqlx::Error> {
        let query = format!(
            "INSERT INTO event_venue_bookings (event_venue_id, slot_id)
             VALUES ($1, $2)
             RETURNING {BOOKING_COLUMNS}"
        );
        sqlx::query_as::<_, EventVenueBooking>(&query)
            .bind(event_venue_id)
            .bind(slot_id)
            .fetch_one(pool)
            .await
    }

    /// List the bookings of an event venue.
    pub async fn list_bookings(
        pool: &PgPool,
        event_venue_id: DbId,
    ) -> Result<Vec<EventVenueBooking>, sqlx::Error> {
        let query = format!(
            "SELECT {BOOKING_COLUMNS} FROM event_venue_bookings
             WHERE event_venue_id = $1
             ORDER BY created_at"
        );
        sqlx::query_as::<_, EventVenueBooking>(&query)
            .bind(event_venue_id)
            .fetch_all(pool)
            .await
    }
}
