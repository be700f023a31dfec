//! Venue availability slots.
//!
//! A slot covers one venue on one date. Its `status` started life as a
//! boolean `is_available` column and is now one of [`SlotStatus`]; the hours
//! already taken on that date are stored as a list of [`HourRange`]s.

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Last hour boundary of a day.
pub const HOURS_PER_DAY: u8 = 24;

// ---------------------------------------------------------------------------
// Slot status
// ---------------------------------------------------------------------------

/// Availability of a venue slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Available,
    Booked,
    Blocked,
}

/// All valid slot status strings.
const VALID_STATUS_STRINGS: &[&str] = &["available", "booked", "blocked"];

impl SlotStatus {
    /// Return the status as stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Booked => "booked",
            Self::Blocked => "blocked",
        }
    }

    /// Parse a status from its column value.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "available" => Ok(Self::Available),
            "booked" => Ok(Self::Booked),
            "blocked" => Ok(Self::Blocked),
            _ => Err(CoreError::Validation(format!(
                "Invalid slot status '{s}'. Must be one of: {}",
                VALID_STATUS_STRINGS.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Booked hours
// ---------------------------------------------------------------------------

/// A half-open range of booked hours, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub start: u8,
    pub end: u8,
}

/// Check that every range lies within a day and that no two ranges overlap.
pub fn check_booked_hours(hours: &[HourRange]) -> Result<(), String> {
    for range in hours {
        if range.start >= range.end || range.end > HOURS_PER_DAY {
            return Err(format!(
                "booked hour range {}-{} must satisfy 0 <= start < end <= {HOURS_PER_DAY}",
                range.start, range.end
            ));
        }
    }

    let mut sorted = hours.to_vec();
    sorted.sort_by_key(|r| r.start);
    for pair in sorted.windows(2) {
        if pair[1].start < pair[0].end {
            return Err(format!(
                "booked hour ranges {}-{} and {}-{} overlap",
                pair[0].start, pair[0].end, pair[1].start, pair[1].end
            ));
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Payload for opening a slot on a venue. `status` defaults to `available`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewVenueSlot {
    pub slot_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub booked_hours: Option<Vec<HourRange>>,
}

/// Partial update for a slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueSlotPatch {
    pub status: Option<String>,
    pub booked_hours: Option<Vec<HourRange>>,
}

fn field_error(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Owned(message))
}

fn check_status_and_hours(
    errors: &mut ValidationErrors,
    status: Option<&str>,
    booked_hours: Option<&[HourRange]>,
) {
    if let Some(status) = status {
        if let Err(e) = SlotStatus::parse(status) {
            let message = match e {
                CoreError::Validation(msg) => msg,
                other => other.to_string(),
            };
            errors.add("status", field_error("one_of", message));
        }
    }
    if let Some(hours) = booked_hours {
        if let Err(message) = check_booked_hours(hours) {
            errors.add("booked_hours", field_error("hour_range", message));
        }
    }
}

impl Validate for NewVenueSlot {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.slot_date.is_none() {
            errors.add(
                "slot_date",
                field_error("required", "slot_date is required".to_string()),
            );
        }
        check_status_and_hours(
            &mut errors,
            self.status.as_deref(),
            self.booked_hours.as_deref(),
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Validate for VenueSlotPatch {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_status_and_hours(
            &mut errors,
            self.status.as_deref(),
            self.booked_hours.as_deref(),
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
