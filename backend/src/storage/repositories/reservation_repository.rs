use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::models::reservation::{Reservation, ReservationFields};
use crate::storage::connection::DbConnection;
use crate::storage::traits::ReservationStorage;

/// SQLite repository for reservations
#[derive(Clone)]
pub struct ReservationRepository {
    db: DbConnection,
}

impl ReservationRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Rebuild an entity from a row. Stored values go through the same
    /// validation as caller-supplied ones.
    fn reservation_from_row(row: &SqliteRow) -> Result<Reservation> {
        let reservation = Reservation::new(ReservationFields {
            id: Some(row.try_get("id")?),
            customer_id: row.try_get("customer_id")?,
            num_guests: row.try_get("num_guests")?,
            start_at: row.try_get::<NaiveDateTime, _>("start_at")?,
            notes: row.try_get("notes")?,
        })?;
        Ok(reservation)
    }
}

#[async_trait]
impl ReservationStorage for ReservationRepository {
    async fn list_reservations_for_customer(&self, customer_id: i64) -> Result<Vec<Reservation>> {
        let rows = sqlx::query(
            r#"
            SELECT id, customer_id, num_guests, start_at, notes
            FROM reservations
            WHERE customer_id = ?
            ORDER BY start_at ASC, id ASC
            "#,
        )
        .bind(customer_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::reservation_from_row).collect()
    }

    async fn get_reservation(&self, reservation_id: i64) -> Result<Option<Reservation>> {
        let row = sqlx::query(
            r#"
            SELECT id, customer_id, num_guests, start_at, notes
            FROM reservations
            WHERE id = ?
            "#,
        )
        .bind(reservation_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::reservation_from_row).transpose()
    }

    async fn insert_reservation(&self, reservation: &Reservation) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO reservations (customer_id, start_at, num_guests, notes)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(reservation.customer_id())
        .bind(reservation.start_at())
        .bind(reservation.num_guests())
        .bind(reservation.notes())
        .execute(self.db.pool())
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update_reservation(&self, reservation: &Reservation) -> Result<bool> {
        let reservation_id = reservation
            .id()
            .ok_or_else(|| anyhow::anyhow!("Cannot update a reservation that has not been saved"))?;

        let result = sqlx::query(
            r#"
            UPDATE reservations
            SET num_guests = ?, start_at = ?, notes = ?
            WHERE id = ?
            "#,
        )
        .bind(reservation.num_guests())
        .bind(reservation.start_at())
        .bind(reservation.notes())
        .bind(reservation_id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
