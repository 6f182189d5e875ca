//! Domain model for a reservation.
//!
//! A `Reservation` can only exist in a valid state: every field passes through
//! the same validator whether it comes from a new booking, a stored row, or a
//! later mutation.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Display pattern for `formatted_start_at`, minus the ordinal day suffix
const DISPLAY_MONTH_FORMAT: &str = "%B";
const DISPLAY_TIME_FORMAT: &str = "%Y, %-I:%M %P";

/// Accepted textual date/time layouts (besides RFC 3339 and epoch millis)
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stored timestamps are text; four-digit years keep text order equal to time order
const MIN_START_YEAR: i32 = 0;
const MAX_START_YEAR: i32 = 9999;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Guests must be greater than 0")]
    InvalidGuestCount,
    #[error("Customer ID already exists")]
    CustomerIdAlreadySet,
    #[error("Not a valid start date/time")]
    InvalidStartAt,
}

/// Raw field values used to build a `Reservation`
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationFields {
    pub id: Option<i64>,
    pub customer_id: i64,
    pub num_guests: i64,
    pub start_at: NaiveDateTime,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    id: Option<i64>,
    customer_id: i64,
    num_guests: i64,
    start_at: NaiveDateTime,
    notes: String,
}

impl Reservation {
    /// Build a reservation, validating every field
    pub fn new(fields: ReservationFields) -> Result<Self, ValidationError> {
        Self::validate_num_guests(fields.num_guests)?;
        validate_start_at(fields.start_at)?;

        Ok(Self {
            id: fields.id,
            customer_id: fields.customer_id,
            num_guests: fields.num_guests,
            start_at: fields.start_at,
            notes: Self::normalize_notes(fields.notes),
        })
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn customer_id(&self) -> i64 {
        self.customer_id
    }

    pub fn num_guests(&self) -> i64 {
        self.num_guests
    }

    pub fn start_at(&self) -> NaiveDateTime {
        self.start_at
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_num_guests(&mut self, num_guests: i64) -> Result<(), ValidationError> {
        Self::validate_num_guests(num_guests)?;
        self.num_guests = num_guests;
        Ok(())
    }

    /// Re-assigning the current customer is a no-op; any other value is rejected
    pub fn set_customer_id(&mut self, customer_id: i64) -> Result<(), ValidationError> {
        if customer_id != self.customer_id {
            return Err(ValidationError::CustomerIdAlreadySet);
        }
        Ok(())
    }

    pub fn set_start_at(&mut self, start_at: NaiveDateTime) -> Result<(), ValidationError> {
        self.start_at = validate_start_at(start_at)?;
        Ok(())
    }

    /// Parse and assign a raw start time; see [`parse_start_at`] for accepted inputs
    pub fn set_start_at_str(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.start_at = parse_start_at(raw)?;
        Ok(())
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = Self::normalize_notes(notes);
    }

    /// Render the start time as e.g. "January 1st 2024, 3:00 pm"
    pub fn formatted_start_at(&self) -> String {
        format!(
            "{} {}{} {}",
            self.start_at.format(DISPLAY_MONTH_FORMAT),
            self.start_at.day(),
            ordinal_suffix(self.start_at.day()),
            self.start_at.format(DISPLAY_TIME_FORMAT),
        )
    }

    /// Assigned by storage after the first insert. The id never changes afterwards.
    pub(crate) fn assign_id(&mut self, id: i64) {
        if self.id.is_none() {
            self.id = Some(id);
        }
    }

    fn validate_num_guests(num_guests: i64) -> Result<(), ValidationError> {
        if num_guests < 1 {
            return Err(ValidationError::InvalidGuestCount);
        }
        Ok(())
    }

    fn normalize_notes(notes: Option<String>) -> String {
        notes.unwrap_or_default()
    }
}

/// Parse a raw start time.
///
/// Accepts RFC 3339 (normalized to UTC), `YYYY-MM-DD HH:MM[:SS[.fff]]` with a
/// space or `T` separator, a bare `YYYY-MM-DD` (midnight), or an integer
/// count of milliseconds since the Unix epoch. Years outside 0000-9999 are
/// rejected.
pub fn parse_start_at(raw: &str) -> Result<NaiveDateTime, ValidationError> {
    parse_raw_start_at(raw).and_then(validate_start_at)
}

fn parse_raw_start_at(raw: &str) -> Result<NaiveDateTime, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::InvalidStartAt);
    }

    if let Ok(millis) = raw.parse::<i64>() {
        return DateTime::from_timestamp_millis(millis)
            .map(|dt| dt.naive_utc())
            .ok_or(ValidationError::InvalidStartAt);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or(ValidationError::InvalidStartAt)
}

fn validate_start_at(start_at: NaiveDateTime) -> Result<NaiveDateTime, ValidationError> {
    if !(MIN_START_YEAR..=MAX_START_YEAR).contains(&start_at.year()) {
        return Err(ValidationError::InvalidStartAt);
    }
    Ok(start_at)
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
