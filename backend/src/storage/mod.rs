//! # Storage Module
//!
//! Handles data persistence for reservations.
//!
//! - **connection.rs** - SQLite pool management and schema setup
//! - **traits.rs** - storage abstraction consumed by the domain layer
//! - **repositories/** - SQLite implementations of the storage traits

pub mod connection;
pub mod repositories;
pub mod traits;

// Re-export the main types that other modules need
pub use connection::DbConnection;
pub use repositories::ReservationRepository;
pub use traits::ReservationStorage;
