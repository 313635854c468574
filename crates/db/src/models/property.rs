//! Property entity model and DTOs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staybook_core::types::{DbId, Timestamp};
use staybook_core::validation::PropertyInput;

/// A row from the `properties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Property {
    pub id: DbId,
    /// Human-facing property identifier, unique across the system.
    pub code: String,
    pub capacity: i32,
    pub bathrooms: i32,
    pub accepts_pets: bool,
    pub cleaning_fee: Decimal,
    pub activation_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `POST /properties`.
#[derive(Debug, Deserialize)]
pub struct CreateProperty {
    pub code: String,
    pub capacity: i32,
    pub bathrooms: i32,
    #[serde(default)]
    pub accepts_pets: bool,
    #[serde(default)]
    pub cleaning_fee: Decimal,
    pub activation_date: Option<NaiveDate>,
}

impl CreateProperty {
    /// The field-validation view of this DTO.
    pub fn as_input(&self) -> PropertyInput {
        PropertyInput {
            capacity: self.capacity,
            bathrooms: self.bathrooms,
            cleaning_fee: self.cleaning_fee,
        }
    }
}

/// DTO for `PUT /properties/{id}`. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateProperty {
    pub code: Option<String>,
    pub capacity: Option<i32>,
    pub bathrooms: Option<i32>,
    pub accepts_pets: Option<bool>,
    pub cleaning_fee: Option<Decimal>,
    pub activation_date: Option<NaiveDate>,
}
