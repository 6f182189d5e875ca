//! # Domain Module
//!
//! Business rules for restaurant reservations.
//!
//! - **models**: the `Reservation` entity and its field validators
//! - **reservation_service**: lookup, fetch and upsert of reservations
//! - **commands**: internal command/result types used by the service
//! - **errors**: the closed error set returned by reservation operations
//!
//! ## Business Rules
//!
//! - A reservation always has at least one guest
//! - A reservation's customer never changes once assigned
//! - The start time is always a valid date/time
//! - Missing notes are stored as an empty string

pub mod commands;
pub mod errors;
pub mod models;
pub mod reservation_service;

pub use commands::*;
pub use errors::*;
pub use reservation_service::*;
