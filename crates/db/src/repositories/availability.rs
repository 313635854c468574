//! sqlx implementation of the core availability-store port.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgConnection;
use staybook_core::overlap::BoundaryPolicy;
use staybook_core::store::{AdvertisementRef, AvailabilityStore, PropertyRef};
use staybook_core::types::DbId;

/// Availability port bound to the connection of a surrounding transaction,
/// so the existence check and the subsequent write share one atomicity
/// boundary.
pub struct PgAvailability<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgAvailability<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl AvailabilityStore for PgAvailability<'_> {
    type Error = sqlx::Error;

    async fn find_advertisement(
        &mut self,
        id: DbId,
    ) -> Result<Option<AdvertisementRef>, sqlx::Error> {
        let row = sqlx::query_as::<_, (DbId, DbId)>(
            "SELECT id, property_id FROM advertisements WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;
        Ok(row.map(|(id, property_id)| AdvertisementRef { id, property_id }))
    }

    async fn find_property(&mut self, id: DbId) -> Result<Option<PropertyRef>, sqlx::Error> {
        let row =
            sqlx::query_as::<_, (DbId, i32)>("SELECT id, capacity FROM properties WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *self.conn)
                .await?;
        Ok(row.map(|(id, capacity)| PropertyRef { id, capacity }))
    }

    async fn exists_conflicting(
        &mut self,
        property_id: DbId,
        checkin: NaiveDate,
        checkout: NaiveDate,
        exclude_reservation: Option<DbId>,
        policy: BoundaryPolicy,
    ) -> Result<bool, sqlx::Error> {
        // One EXISTS so the scan short-circuits on the first match instead
        // of loading the property's reservation set.
        let (checkout_op, checkin_op) = match policy {
            BoundaryPolicy::Inclusive => (">=", "<="),
            BoundaryPolicy::ExclusiveCheckout => (">", "<"),
        };
        let query = format!(
            "SELECT EXISTS (
                 SELECT 1 FROM reservations r
                 JOIN advertisements a ON a.id = r.advertisement_id
                 WHERE a.property_id = $1
                   AND r.checkout_date {checkout_op} $2
                   AND r.checkin_date {checkin_op} $3
                   AND ($4::BIGINT IS NULL OR r.id <> $4)
             )"
        );
        sqlx::query_scalar::<_, bool>(&query)
            .bind(property_id)
            .bind(checkin)
            .bind(checkout)
            .bind(exclude_reservation)
            .fetch_one(&mut *self.conn)
            .await
    }
}
