use shared::{
    CreateReservationRequest, Reservation, ReservationListResponse, ReservationResponse,
    UpdateReservationRequest,
};

use crate::domain::commands::reservation::{
    CreateReservationCommand, SaveReservationResult, UpdateReservationCommand,
};
use crate::domain::models::reservation::Reservation as DomainReservation;

/// Wire format for `start_at` in responses
const DTO_START_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub struct ReservationMapper;

impl ReservationMapper {
    /// Convert a stored domain reservation to the shared DTO.
    /// Unsaved reservations have no ID and are reported as 0.
    pub fn to_dto(domain: &DomainReservation) -> Reservation {
        Reservation {
            id: domain.id().unwrap_or_default(),
            customer_id: domain.customer_id(),
            num_guests: domain.num_guests(),
            start_at: domain.start_at().format(DTO_START_AT_FORMAT).to_string(),
            formatted_start_at: domain.formatted_start_at(),
            notes: domain.notes().to_string(),
        }
    }

    pub fn to_dto_list(customer_id: i64, domain: &[DomainReservation]) -> ReservationListResponse {
        ReservationListResponse {
            customer_id,
            reservations: domain.iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_response(result: SaveReservationResult) -> ReservationResponse {
        ReservationResponse {
            reservation: Self::to_dto(&result.reservation),
            success_message: result.success_message,
        }
    }

    pub fn to_create_command(customer_id: i64, request: CreateReservationRequest) -> CreateReservationCommand {
        CreateReservationCommand {
            customer_id,
            num_guests: request.num_guests,
            start_at: request.start_at.into(),
            notes: request.notes,
        }
    }

    pub fn to_update_command(reservation_id: i64, request: UpdateReservationRequest) -> UpdateReservationCommand {
        UpdateReservationCommand {
            reservation_id,
            num_guests: request.num_guests,
            start_at: request.start_at.map(String::from),
            notes: request.notes,
        }
    }
}
