//! Repository for the `properties` table.

use sqlx::PgPool;
use staybook_core::types::DbId;
use staybook_core::validation::PropertyInput;

use crate::error::WriteError;
use crate::models::property::{CreateProperty, Property, UpdateProperty};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code, capacity, bathrooms, accepts_pets, cleaning_fee, \
     activation_date, created_at, updated_at";

/// Provides CRUD operations for properties.
pub struct PropertyRepo;

impl PropertyRepo {
    /// Insert a new property, returning the created row.
    ///
    /// Field bounds are re-checked here so the invariants hold for every
    /// writer, not just the HTTP boundary.
    pub async fn create(pool: &PgPool, input: &CreateProperty) -> Result<Property, WriteError> {
        let errors = input.as_input().validate();
        if !errors.is_empty() {
            return Err(WriteError::Rejected(errors));
        }

        let query = format!(
            "INSERT INTO properties (code, capacity, bathrooms, accepts_pets, cleaning_fee, activation_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let property = sqlx::query_as::<_, Property>(&query)
            .bind(&input.code)
            .bind(input.capacity)
            .bind(input.bathrooms)
            .bind(input.accepts_pets)
            .bind(input.cleaning_fee)
            .bind(input.activation_date)
            .fetch_one(pool)
            .await?;
        tracing::info!(property_id = property.id, code = %property.code, "property created");
        Ok(property)
    }

    /// Find a property by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties WHERE id = $1");
        sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all properties, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Property>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM properties ORDER BY created_at DESC");
        sqlx::query_as::<_, Property>(&query).fetch_all(pool).await
    }

    /// Update a property. Only non-`None` fields in `input` are applied; the
    /// merged record is validated before the write.
    ///
    /// Returns `Ok(None)` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProperty,
    ) -> Result<Option<Property>, WriteError> {
        let Some(current) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let merged = PropertyInput {
            capacity: input.capacity.unwrap_or(current.capacity),
            bathrooms: input.bathrooms.unwrap_or(current.bathrooms),
            cleaning_fee: input.cleaning_fee.unwrap_or(current.cleaning_fee),
        };
        let errors = merged.validate();
        if !errors.is_empty() {
            return Err(WriteError::Rejected(errors));
        }

        let query = format!(
            "UPDATE properties SET
                code = COALESCE($2, code),
                capacity = COALESCE($3, capacity),
                bathrooms = COALESCE($4, bathrooms),
                accepts_pets = COALESCE($5, accepts_pets),
                cleaning_fee = COALESCE($6, cleaning_fee),
                activation_date = COALESCE($7, activation_date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let property = sqlx::query_as::<_, Property>(&query)
            .bind(id)
            .bind(&input.code)
            .bind(input.capacity)
            .bind(input.bathrooms)
            .bind(input.accepts_pets)
            .bind(input.cleaning_fee)
            .bind(input.activation_date)
            .fetch_optional(pool)
            .await?;
        Ok(property)
    }

    /// Delete a property by ID. Cascades to its advertisements and their
    /// reservations. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
