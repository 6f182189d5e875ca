//! # Lunchly Backend
//!
//! Reservation management for a restaurant customer app.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (Reservation entity, validation, service)
//!     ↓
//! Storage Layer (SQLite repository)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{http::Method, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::ReservationService;
use crate::storage::{DbConnection, ReservationRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub reservation_service: ReservationService,
}

impl AppState {
    pub fn new(db: DbConnection) -> Self {
        let repository = ReservationRepository::new(db);
        Self {
            reservation_service: ReservationService::new(Arc::new(repository)),
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url, config.max_connections).await?;

    info!("Setting up application state");
    Ok(AppState::new(db))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers(Any);

    Router::new()
        .nest("/api", io::rest::reservation_apis::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
