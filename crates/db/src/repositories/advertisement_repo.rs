//! Repository for the `advertisements` table.

use sqlx::PgPool;
use staybook_core::types::DbId;
use staybook_core::validation::{codes, AdvertisementInput};

use crate::error::WriteError;
use crate::models::advertisement::{Advertisement, CreateAdvertisement, UpdateAdvertisement};

const COLUMNS: &str = "id, property_id, platform, platform_fee, created_at, updated_at";

/// Provides CRUD operations for advertisements. There is no delete path;
/// advertisements leave the system only when their property cascades.
pub struct AdvertisementRepo;

impl AdvertisementRepo {
    /// Insert a new advertisement, returning the created row.
    ///
    /// The referenced property must exist; a dangling reference is reported
    /// as a structural error on `property_id`, not as a bare FK violation.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAdvertisement,
    ) -> Result<Advertisement, WriteError> {
        let mut errors = input.as_input().validate();
        if !Self::property_exists(pool, input.property_id).await? {
            errors.add("property_id", codes::REQUIRED, "The property does not exist.");
        }
        if !errors.is_empty() {
            return Err(WriteError::Rejected(errors));
        }

        let query = format!(
            "INSERT INTO advertisements (property_id, platform, platform_fee)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let advertisement = sqlx::query_as::<_, Advertisement>(&query)
            .bind(input.property_id)
            .bind(&input.platform)
            .bind(input.platform_fee)
            .fetch_one(pool)
            .await?;
        tracing::info!(
            advertisement_id = advertisement.id,
            property_id = advertisement.property_id,
            platform = %advertisement.platform,
            "advertisement created"
        );
        Ok(advertisement)
    }

    /// Find an advertisement by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Advertisement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM advertisements WHERE id = $1");
        sqlx::query_as::<_, Advertisement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all advertisements, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Advertisement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM advertisements ORDER BY created_at DESC");
        sqlx::query_as::<_, Advertisement>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an advertisement. Only non-`None` fields are applied; the
    /// merged record is validated before the write.
    ///
    /// Returns `Ok(None)` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAdvertisement,
    ) -> Result<Option<Advertisement>, WriteError> {
        let Some(current) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let merged = AdvertisementInput {
            platform: input.platform.clone().unwrap_or(current.platform),
            platform_fee: input.platform_fee.unwrap_or(current.platform_fee),
        };
        let mut errors = merged.validate();
        if let Some(property_id) = input.property_id {
            if !Self::property_exists(pool, property_id).await? {
                errors.add("property_id", codes::REQUIRED, "The property does not exist.");
            }
        }
        if !errors.is_empty() {
            return Err(WriteError::Rejected(errors));
        }

        let query = format!(
            "UPDATE advertisements SET
                property_id = COALESCE($2, property_id),
                platform = COALESCE($3, platform),
                platform_fee = COALESCE($4, platform_fee),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Advertisement>(&query)
            .bind(id)
            .bind(input.property_id)
            .bind(&input.platform)
            .bind(input.platform_fee)
            .fetch_optional(pool)
            .await
            .map_err(WriteError::from)
    }

    async fn property_exists(pool: &PgPool, property_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM properties WHERE id = $1)")
            .bind(property_id)
            .fetch_one(pool)
            .await
    }
}
