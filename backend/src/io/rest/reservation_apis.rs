//! # REST API for Reservations
//!
//! Endpoints for listing a customer's reservations, booking a new one, and
//! fetching or changing an existing one.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use tracing::{error, info};

use crate::domain::errors::ReservationError;
use crate::io::rest::mappers::reservation_mapper::ReservationMapper;
use crate::AppState;
use shared::{CreateReservationRequest, UpdateReservationRequest};

/// Create a router for reservation related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/customers/:customer_id/reservations",
            get(list_customer_reservations).post(create_reservation),
        )
        .route(
            "/reservations/:reservation_id",
            get(get_reservation).put(update_reservation),
        )
}

/// List a customer's reservations, earliest first
pub async fn list_customer_reservations(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /api/customers/{}/reservations", customer_id);

    match state
        .reservation_service
        .get_reservations_for_customer(customer_id)
        .await
    {
        Ok(reservations) => {
            let response = ReservationMapper::to_dto_list(customer_id, &reservations);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("Failed to list reservations", e),
    }
}

/// Book a new reservation for a customer
pub async fn create_reservation(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
    Json(request): Json<CreateReservationRequest>,
) -> impl IntoResponse {
    info!("POST /api/customers/{}/reservations - request: {:?}", customer_id, request);

    let command = ReservationMapper::to_create_command(customer_id, request);

    match state.reservation_service.create_reservation(command).await {
        Ok(result) => {
            (StatusCode::CREATED, Json(ReservationMapper::to_response(result))).into_response()
        }
        Err(e) => error_response("Failed to create reservation", e),
    }
}

/// Fetch a single reservation
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(reservation_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /api/reservations/{}", reservation_id);

    match state.reservation_service.get(reservation_id).await {
        Ok(reservation) => {
            let response = shared::ReservationResponse {
                reservation: ReservationMapper::to_dto(&reservation),
                success_message: "Reservation retrieved successfully".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("Failed to get reservation", e),
    }
}

/// Change the guest count, start time or notes of a reservation
pub async fn update_reservation(
    State(state): State<AppState>,
    Path(reservation_id): Path<i64>,
    Json(request): Json<UpdateReservationRequest>,
) -> impl IntoResponse {
    info!("PUT /api/reservations/{} - request: {:?}", reservation_id, request);

    let command = ReservationMapper::to_update_command(reservation_id, request);

    match state.reservation_service.update_reservation(command).await {
        Ok(result) => (StatusCode::OK, Json(ReservationMapper::to_response(result))).into_response(),
        Err(e) => error_response("Failed to update reservation", e),
    }
}

fn error_response(context: &str, e: ReservationError) -> Response {
    let status = e.status_code();
    error!("{}: {}", context, e);

    // Storage details stay in the log
    let message = match e {
        ReservationError::Storage(_) => "Database error".to_string(),
        other => other.to_string(),
    };
    (status, message).into_response()
}
