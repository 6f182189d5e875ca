//! Domain-level command and query types.
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod reservation {
    use crate::domain::models::reservation::Reservation;

    /// Input for booking a new reservation.
    #[derive(Debug, Clone)]
    pub struct CreateReservationCommand {
        pub customer_id: i64,
        pub num_guests: i64,
        /// Raw start time, parsed by `parse_start_at`
        pub start_at: String,
        pub notes: Option<String>,
    }

    /// Input for changing the mutable fields of an existing reservation.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateReservationCommand {
        pub reservation_id: i64,
        pub num_guests: Option<i64>,
        pub start_at: Option<String>,
        pub notes: Option<String>,
    }

    /// Result of creating or updating a reservation.
    #[derive(Debug, Clone)]
    pub struct SaveReservationResult {
        pub reservation: Reservation,
        pub success_message: String,
    }
}
