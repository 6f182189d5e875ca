use serde::{Deserialize, Serialize};

/// A reservation as exposed over the REST API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    /// ID of the customer this reservation belongs to
    pub customer_id: i64,
    /// Party size (always at least 1)
    pub num_guests: i64,
    /// Start time, `YYYY-MM-DDTHH:MM:SS`
    pub start_at: String,
    /// Start time rendered for display, e.g. "January 1st 2024, 3:00 pm"
    pub formatted_start_at: String,
    pub notes: String,
}

/// Start time as sent by a client: a date/time string or epoch milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StartAtInput {
    EpochMillis(i64),
    /// RFC 3339, `YYYY-MM-DD HH:MM[:SS]`, `YYYY-MM-DD`, or epoch milliseconds as text
    Text(String),
}

impl From<StartAtInput> for String {
    fn from(value: StartAtInput) -> Self {
        match value {
            StartAtInput::EpochMillis(millis) => millis.to_string(),
            StartAtInput::Text(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    pub num_guests: i64,
    pub start_at: StartAtInput,
    pub notes: Option<String>,
}

/// Partial update; fields left as `None` keep their stored value
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateReservationRequest {
    pub num_guests: Option<i64>,
    pub start_at: Option<StartAtInput>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub reservation: Reservation,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationListResponse {
    pub customer_id: i64,
    pub reservations: Vec<Reservation>,
}
