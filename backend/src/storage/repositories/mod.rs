// Repository modules
pub mod reservation_repository;

// Re-export repository types
pub use reservation_repository::ReservationRepository;
