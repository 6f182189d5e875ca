//! # REST API Interface Layer
//!
//! HTTP endpoints for reservations. Handlers translate shared DTOs into domain
//! commands, call the service, and turn domain errors into status codes via
//! `ReservationError::status_code`. No business logic lives here.

pub mod mappers;
pub mod reservation_apis;
