//! Error type returned by reservation operations.
//!
//! Each variant carries a human-readable message and maps to the HTTP status
//! the REST layer should answer with.

use axum::http::StatusCode;

use crate::domain::models::reservation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum ReservationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Reservation not found")]
    NotFound,
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl ReservationError {
    /// HTTP-equivalent status for surfacing this error to a client
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReservationError::Validation(_) => StatusCode::BAD_REQUEST,
            ReservationError::NotFound => StatusCode::NOT_FOUND,
            ReservationError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type ReservationResult<T> = Result<T, ReservationError>;
