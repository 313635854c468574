//! Repository for the `reservations` table.
//!
//! Create and update run the core validation pipeline and the row write
//! inside one transaction; the availability port borrows that transaction's
//! connection so the conflict existence check serializes against concurrent
//! writers. There is deliberately no delete method: cancellation is rejected
//! at the HTTP boundary.

use sqlx::PgPool;
use staybook_core::overlap::BoundaryPolicy;
use staybook_core::types::{DbId, ReservationCode};
use staybook_core::validation::{validate_reservation, Decision, ValidationMode};
use uuid::Uuid;

use crate::error::WriteError;
use crate::models::reservation::{CreateReservation, Reservation, UpdateReservation};
use crate::repositories::availability::PgAvailability;

const COLUMNS: &str = "id, advertisement_id, property_id, code, checkin_date, checkout_date, \
     total_price, comment, guest_count, created_at, updated_at";

/// Provides the validated write paths and read access for reservations.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Validate and insert a new reservation in one transaction.
    ///
    /// The opaque public `code` is generated here; callers never supply it.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReservation,
        policy: BoundaryPolicy,
    ) -> Result<Reservation, WriteError> {
        let candidate = input.candidate();
        let mut tx = pool.begin().await?;

        let decision = {
            let mut store = PgAvailability::new(&mut *tx);
            validate_reservation(&candidate, ValidationMode::Create, policy, &mut store).await?
        };
        let property_id = match decision {
            Decision::Accepted { property_id } => property_id,
            Decision::Rejected(errors) => return Err(WriteError::Rejected(errors)),
        };

        let query = format!(
            "INSERT INTO reservations
                (advertisement_id, property_id, code, checkin_date, checkout_date,
                 total_price, comment, guest_count)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let reservation = sqlx::query_as::<_, Reservation>(&query)
            .bind(input.advertisement_id)
            .bind(property_id)
            .bind(Uuid::new_v4())
            .bind(input.checkin_date)
            .bind(input.checkout_date)
            .bind(input.total_price)
            .bind(&input.comment)
            .bind(input.guest_count)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(
            reservation_id = reservation.id,
            property_id,
            code = %reservation.code,
            "reservation created"
        );
        Ok(reservation)
    }

    /// Validate and replace an existing reservation in one transaction.
    ///
    /// The stored row is locked while the pipeline runs, and its own id is
    /// excluded from the conflict scan so unchanged dates never conflict
    /// with themselves. The `code` is immutable.
    ///
    /// Returns `Ok(None)` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReservation,
        policy: BoundaryPolicy,
    ) -> Result<Option<Reservation>, WriteError> {
        let candidate = input.candidate();
        let mut tx = pool.begin().await?;

        let lock_query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1 FOR UPDATE");
        let current = sqlx::query_as::<_, Reservation>(&lock_query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if current.is_none() {
            return Ok(None);
        }

        let decision = {
            let mut store = PgAvailability::new(&mut *tx);
            validate_reservation(
                &candidate,
                ValidationMode::Update { reservation_id: id },
                policy,
                &mut store,
            )
            .await?
        };
        let property_id = match decision {
            Decision::Accepted { property_id } => property_id,
            Decision::Rejected(errors) => return Err(WriteError::Rejected(errors)),
        };

        let query = format!(
            "UPDATE reservations SET
                advertisement_id = $2,
                property_id = $3,
                checkin_date = $4,
                checkout_date = $5,
                total_price = $6,
                comment = $7,
                guest_count = $8,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let reservation = sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .bind(input.advertisement_id)
            .bind(property_id)
            .bind(input.checkin_date)
            .bind(input.checkout_date)
            .bind(input.total_price)
            .bind(&input.comment)
            .bind(input.guest_count)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(reservation_id = id, property_id, "reservation updated");
        Ok(Some(reservation))
    }

    /// Find a reservation by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a reservation by its opaque public code.
    pub async fn find_by_code(
        pool: &PgPool,
        code: ReservationCode,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE code = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// List all reservations, ordered by check-in date.
    pub async fn list(pool: &PgPool) -> Result<Vec<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations ORDER BY checkin_date ASC, id ASC");
        sqlx::query_as::<_, Reservation>(&query).fetch_all(pool).await
    }
}
