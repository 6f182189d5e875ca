use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::reservation::{
    CreateReservationCommand, SaveReservationResult, UpdateReservationCommand,
};
use crate::domain::errors::{ReservationError, ReservationResult};
use crate::domain::models::reservation::{parse_start_at, Reservation, ReservationFields};
use crate::storage::traits::ReservationStorage;

/// Service for looking up, booking and changing reservations
#[derive(Clone)]
pub struct ReservationService {
    storage: Arc<dyn ReservationStorage>,
}

impl ReservationService {
    pub fn new(storage: Arc<dyn ReservationStorage>) -> Self {
        Self { storage }
    }

    /// All of a customer's reservations, earliest first. Empty if there are none.
    pub async fn get_reservations_for_customer(
        &self,
        customer_id: i64,
    ) -> ReservationResult<Vec<Reservation>> {
        info!("Listing reservations for customer: {}", customer_id);

        let reservations = self
            .storage
            .list_reservations_for_customer(customer_id)
            .await?;

        info!("Found {} reservations for customer {}", reservations.len(), customer_id);
        Ok(reservations)
    }

    /// Fetch one reservation by ID
    pub async fn get(&self, reservation_id: i64) -> ReservationResult<Reservation> {
        info!("Getting reservation: {}", reservation_id);

        match self.storage.get_reservation(reservation_id).await? {
            Some(reservation) => Ok(reservation),
            None => {
                warn!("Reservation not found: {}", reservation_id);
                Err(ReservationError::NotFound)
            }
        }
    }

    /// Insert the reservation if it has no ID yet, otherwise update its row.
    /// No concurrency check: the last save wins.
    pub async fn save(&self, reservation: &mut Reservation) -> ReservationResult<()> {
        match reservation.id() {
            None => {
                let id = self.storage.insert_reservation(reservation).await?;
                reservation.assign_id(id);
                info!(
                    "Created reservation {} for customer {}",
                    id,
                    reservation.customer_id()
                );
            }
            Some(id) => {
                if !self.storage.update_reservation(reservation).await? {
                    warn!("Reservation not found on update: {}", id);
                    return Err(ReservationError::NotFound);
                }
                info!("Updated reservation {}", id);
            }
        }
        Ok(())
    }

    /// Book a new reservation for a customer
    pub async fn create_reservation(
        &self,
        command: CreateReservationCommand,
    ) -> ReservationResult<SaveReservationResult> {
        info!(
            "Creating reservation: customer={}, guests={}, start_at={}",
            command.customer_id, command.num_guests, command.start_at
        );

        let mut reservation = Reservation::new(ReservationFields {
            id: None,
            customer_id: command.customer_id,
            num_guests: command.num_guests,
            start_at: parse_start_at(&command.start_at)?,
            notes: command.notes,
        })?;

        self.save(&mut reservation).await?;

        Ok(SaveReservationResult {
            reservation,
            success_message: "Reservation created successfully".to_string(),
        })
    }

    /// Change the guest count, start time or notes of a stored reservation
    pub async fn update_reservation(
        &self,
        command: UpdateReservationCommand,
    ) -> ReservationResult<SaveReservationResult> {
        info!("Updating reservation: {}", command.reservation_id);

        let mut reservation = self.get(command.reservation_id).await?;

        if let Some(num_guests) = command.num_guests {
            reservation.set_num_guests(num_guests)?;
        }
        if let Some(start_at) = command.start_at.as_deref() {
            reservation.set_start_at_str(start_at)?;
        }
        if command.notes.is_some() {
            reservation.set_notes(command.notes);
        }

        self.save(&mut reservation).await?;

        Ok(SaveReservationResult {
            reservation,
            success_message: "Reservation updated successfully".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::repositories::reservation_repository::test_utils::{
        insert_raw_row, seed_customer, setup_test,
    };
    use crate::storage::ReservationRepository;
    use tempfile::TempDir;

    async fn setup_service() -> (ReservationService, ReservationRepository, TempDir) {
        let (repo, dir) = setup_test().await;
        let service = ReservationService::new(Arc::new(repo.clone()));
        (service, repo, dir)
    }

    fn create_command(customer_id: i64, start_at: &str) -> CreateReservationCommand {
        CreateReservationCommand {
            customer_id,
            num_guests: 2,
            start_at: start_at.to_string(),
            notes: None,
        }
    }

    async fn count_rows(repo: &ReservationRepository, customer_id: i64) -> usize {
        repo.list_reservations_for_customer(customer_id).await.unwrap().len()
    }

    #[tokio::test]
    async fn test_save_inserts_then_updates_same_row() {
        let (service, repo, _dir) = setup_service().await;
        let customer_id = seed_customer(&repo, "Ann").await;

        let mut reservation = Reservation::new(ReservationFields {
            id: None,
            customer_id,
            num_guests: 3,
            start_at: parse_start_at("2024-01-01 15:00").unwrap(),
            notes: Some("table by window".to_string()),
        })
        .unwrap();

        service.save(&mut reservation).await.unwrap();
        let id = reservation.id().expect("Save should populate the ID");
        assert_eq!(count_rows(&repo, customer_id).await, 1);

        reservation.set_num_guests(5).unwrap();
        service.save(&mut reservation).await.unwrap();

        assert_eq!(reservation.id(), Some(id));
        assert_eq!(count_rows(&repo, customer_id).await, 1);

        let fetched = service.get(id).await.unwrap();
        assert_eq!(fetched.num_guests(), 5);
        assert_eq!(fetched.notes(), "table by window");
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let (service, _repo, _dir) = setup_service().await;

        let err = service.get(404).await.unwrap_err();
        assert!(matches!(err, ReservationError::NotFound));
        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_invalid_stored_row_is_storage_error() {
        let (service, repo, _dir) = setup_service().await;
        let customer_id = seed_customer(&repo, "Ann").await;
        let id = insert_raw_row(&repo, customer_id, "not a date").await;

        let err = service.get(id).await.unwrap_err();
        assert!(matches!(err, ReservationError::Storage(_)));
        assert_eq!(err.status_code(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);

        let err = service.get_reservations_for_customer(customer_id).await.unwrap_err();
        assert!(matches!(err, ReservationError::Storage(_)));
    }

    #[tokio::test]
    async fn test_save_with_stale_id_is_not_found() {
        let (service, repo, _dir) = setup_service().await;
        let customer_id = seed_customer(&repo, "Ann").await;

        let mut reservation = Reservation::new(ReservationFields {
            id: Some(99),
            customer_id,
            num_guests: 2,
            start_at: parse_start_at("2024-01-01 15:00").unwrap(),
            notes: None,
        })
        .unwrap();

        let err = service.save(&mut reservation).await.unwrap_err();
        assert!(matches!(err, ReservationError::NotFound));
        assert_eq!(count_rows(&repo, customer_id).await, 0);
    }

    #[tokio::test]
    async fn test_reservations_for_customer_in_time_order() {
        let (service, repo, _dir) = setup_service().await;
        let customer_id = seed_customer(&repo, "Ann").await;
        let other_customer = seed_customer(&repo, "Bob").await;

        let t3 = service.create_reservation(create_command(customer_id, "2024-06-01 20:00")).await.unwrap();
        let t1 = service.create_reservation(create_command(customer_id, "2024-06-01 12:00")).await.unwrap();
        let t2 = service.create_reservation(create_command(customer_id, "2024-06-01 18:30")).await.unwrap();

        let ids: Vec<Option<i64>> = service
            .get_reservations_for_customer(customer_id)
            .await
            .unwrap()
            .iter()
            .map(Reservation::id)
            .collect();

        assert_eq!(ids, vec![t1.reservation.id(), t2.reservation.id(), t3.reservation.id()]);
        assert!(service.get_reservations_for_customer(other_customer).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_reservation() {
        let (service, repo, _dir) = setup_service().await;
        let customer_id = seed_customer(&repo, "Ann").await;

        let result = service
            .create_reservation(CreateReservationCommand {
                customer_id,
                num_guests: 4,
                start_at: "2024-01-01T15:00:00Z".to_string(),
                notes: None,
            })
            .await
            .unwrap();

        assert!(result.reservation.id().is_some());
        assert_eq!(result.reservation.notes(), "");
        assert_eq!(result.reservation.formatted_start_at(), "January 1st 2024, 3:00 pm");
        assert_eq!(result.success_message, "Reservation created successfully");
    }

    #[tokio::test]
    async fn test_create_reservation_validation() {
        let (service, repo, _dir) = setup_service().await;
        let customer_id = seed_customer(&repo, "Ann").await;

        let err = service
            .create_reservation(CreateReservationCommand {
                num_guests: 0,
                ..create_command(customer_id, "2024-01-01 15:00")
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Guests must be greater than 0");

        let err = service
            .create_reservation(create_command(customer_id, "next tuesday"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Not a valid start date/time");
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);

        assert_eq!(count_rows(&repo, customer_id).await, 0);
    }

    #[tokio::test]
    async fn test_create_reservation_for_unknown_customer() {
        let (service, _repo, _dir) = setup_service().await;

        let err = service
            .create_reservation(create_command(31337, "2024-01-01 15:00"))
            .await
            .unwrap_err();
        assert!(matches!(err, ReservationError::Storage(_)));
    }

    #[tokio::test]
    async fn test_update_reservation() {
        let (service, repo, _dir) = setup_service().await;
        let customer_id = seed_customer(&repo, "Ann").await;
        let created = service
            .create_reservation(create_command(customer_id, "2024-01-01 15:00"))
            .await
            .unwrap();
        let id = created.reservation.id().unwrap();

        let result = service
            .update_reservation(UpdateReservationCommand {
                reservation_id: id,
                num_guests: Some(8),
                start_at: None,
                notes: Some("table by window".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.reservation.num_guests(), 8);
        assert_eq!(result.reservation.start_at(), created.reservation.start_at());
        assert_eq!(result.success_message, "Reservation updated successfully");

        let fetched = service.get(id).await.unwrap();
        assert_eq!(fetched.notes(), "table by window");
        assert_eq!(fetched.customer_id(), customer_id);
    }

    #[tokio::test]
    async fn test_update_reservation_rejects_bad_values() {
        let (service, repo, _dir) = setup_service().await;
        let customer_id = seed_customer(&repo, "Ann").await;
        let created = service
            .create_reservation(create_command(customer_id, "2024-01-01 15:00"))
            .await
            .unwrap();
        let id = created.reservation.id().unwrap();

        let err = service
            .update_reservation(UpdateReservationCommand {
                reservation_id: id,
                num_guests: Some(-2),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ReservationError::Validation(_)));
        assert_eq!(service.get(id).await.unwrap().num_guests(), 2);

        let err = service
            .update_reservation(UpdateReservationCommand {
                reservation_id: id + 100,
                num_guests: Some(3),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ReservationError::NotFound));
    }
}
