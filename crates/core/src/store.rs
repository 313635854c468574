//! Persistence port consumed by the validation pipeline.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::overlap::BoundaryPolicy;
use crate::types::DbId;

/// An advertisement as the pipeline needs to see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvertisementRef {
    pub id: DbId,
    pub property_id: DbId,
}

/// A property as the pipeline needs to see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyRef {
    pub id: DbId,
    pub capacity: i32,
}

/// Read access to advertisements, properties, and the reservation overlap
/// existence query.
///
/// Contract for writers: the implementation handed to
/// [`validate_reservation`](crate::validation::validate_reservation) during a
/// create or update must share the transaction that performs the subsequent
/// write, so the existence check serializes against concurrent writers to
/// the same property's reservation set.
#[async_trait]
pub trait AvailabilityStore {
    type Error;

    async fn find_advertisement(
        &mut self,
        id: DbId,
    ) -> Result<Option<AdvertisementRef>, Self::Error>;

    async fn find_property(&mut self, id: DbId) -> Result<Option<PropertyRef>, Self::Error>;

    /// Whether at least one reservation on `property_id`, across all of its
    /// advertisements, overlaps the given range under `policy`.
    ///
    /// `exclude_reservation` removes the candidate's own prior identity from
    /// the scan on update; self-comparison must never count as a conflict.
    /// Implementations must short-circuit on the first match rather than
    /// loading the reservation set.
    async fn exists_conflicting(
        &mut self,
        property_id: DbId,
        checkin: NaiveDate,
        checkout: NaiveDate,
        exclude_reservation: Option<DbId>,
        policy: BoundaryPolicy,
    ) -> Result<bool, Self::Error>;
}
