//! Advertisement entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use staybook_core::types::{DbId, Timestamp};
use staybook_core::validation::AdvertisementInput;

/// A row from the `advertisements` table. A property may be advertised on
/// any number of platforms; all of them book the same physical unit.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Advertisement {
    pub id: DbId,
    pub property_id: DbId,
    pub platform: String,
    pub platform_fee: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `POST /advertisements`.
#[derive(Debug, Deserialize)]
pub struct CreateAdvertisement {
    pub property_id: DbId,
    pub platform: String,
    #[serde(default)]
    pub platform_fee: Decimal,
}

impl CreateAdvertisement {
    pub fn as_input(&self) -> AdvertisementInput {
        AdvertisementInput {
            platform: self.platform.clone(),
            platform_fee: self.platform_fee,
        }
    }
}

/// DTO for `PUT /advertisements/{id}`. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateAdvertisement {
    pub property_id: Option<DbId>,
    pub platform: Option<String>,
    pub platform_fee: Option<Decimal>,
}
