//! # Storage Traits
//!
//! Storage abstraction used by the domain layer, so services can be tested
//! against any backend that implements it.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::reservation::Reservation;

/// Persistence operations for reservations
#[async_trait]
pub trait ReservationStorage: Send + Sync {
    /// List a customer's reservations ordered by start time ascending
    async fn list_reservations_for_customer(&self, customer_id: i64) -> Result<Vec<Reservation>>;

    /// Retrieve a reservation by ID
    async fn get_reservation(&self, reservation_id: i64) -> Result<Option<Reservation>>;

    /// Insert a new reservation and return its generated ID
    async fn insert_reservation(&self, reservation: &Reservation) -> Result<i64>;

    /// Update the mutable fields of a stored reservation.
    /// Returns false if no row has the reservation's ID.
    async fn update_reservation(&self, reservation: &Reservation) -> Result<bool>;
}
