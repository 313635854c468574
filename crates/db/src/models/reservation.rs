//! Reservation entity model and DTOs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staybook_core::types::{DbId, ReservationCode, Timestamp};
use staybook_core::validation::ReservationCandidate;

/// A row from the `reservations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservation {
    pub id: DbId,
    pub advertisement_id: DbId,
    /// Denormalized from the advertisement at write time; kept in step by
    /// the repository so the storage-level overlap backstop can reference
    /// it.
    pub property_id: DbId,
    /// Opaque public identifier, generated at creation and immutable.
    pub code: ReservationCode,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    pub total_price: Decimal,
    pub comment: Option<String>,
    pub guest_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `POST /reservations`. The `code` is generated server-side and
/// cannot be supplied.
#[derive(Debug, Deserialize)]
pub struct CreateReservation {
    pub advertisement_id: DbId,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    pub total_price: Decimal,
    pub comment: Option<String>,
    pub guest_count: i32,
}

impl CreateReservation {
    /// The pipeline's view of this DTO.
    pub fn candidate(&self) -> ReservationCandidate {
        ReservationCandidate {
            advertisement_id: self.advertisement_id,
            checkin_date: self.checkin_date,
            checkout_date: self.checkout_date,
            total_price: self.total_price,
            guest_count: self.guest_count,
        }
    }
}

/// DTO for `PUT /reservations/{id}`: full-record replacement, re-validated
/// through the same pipeline as creation. The stored `code` is never
/// replaced.
#[derive(Debug, Deserialize)]
pub struct UpdateReservation {
    pub advertisement_id: DbId,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    pub total_price: Decimal,
    pub comment: Option<String>,
    pub guest_count: i32,
}

impl UpdateReservation {
    pub fn candidate(&self) -> ReservationCandidate {
        ReservationCandidate {
            advertisement_id: self.advertisement_id,
            checkin_date: self.checkin_date,
            checkout_date: self.checkout_date,
            total_price: self.total_price,
            guest_count: self.guest_count,
        }
    }
}
