//! The ordered validation pipeline run against a reservation candidate
//! before commit.

use crate::capacity::check_capacity;
use crate::overlap::BoundaryPolicy;
use crate::store::AvailabilityStore;
use crate::types::DbId;
use crate::validation::entity::ReservationCandidate;
use crate::validation::errors::{codes, ValidationErrors, NON_FIELD_ERRORS};

/// Whether the candidate is a new reservation or replaces an existing one.
///
/// Update mode carries the reservation's own id so the conflict query never
/// counts the candidate against its prior self.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Create,
    Update { reservation_id: DbId },
}

/// Terminal pipeline state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The candidate may be persisted. Carries the property resolved through
    /// the advertisement so the writer can record it without a second lookup.
    Accepted { property_id: DbId },
    /// Non-empty structured error set; no side effects were performed.
    Rejected(ValidationErrors),
}

/// Run the full pipeline: structural field checks, advertisement resolution,
/// capacity check, conflict query.
///
/// Field checks all run and collect regardless of each other. The capacity
/// and conflict checks short-circuit only when the advertisement reference
/// cannot be resolved; the conflict query additionally requires an ordered
/// date pair. Validating the same candidate twice yields the same decision;
/// nothing here writes.
///
/// Callers on the write path must hand in a store bound to the transaction
/// that will perform the insert or update (see
/// [`AvailabilityStore`](crate::store::AvailabilityStore)).
pub async fn validate_reservation<S>(
    candidate: &ReservationCandidate,
    mode: ValidationMode,
    policy: BoundaryPolicy,
    store: &mut S,
) -> Result<Decision, S::Error>
where
    S: AvailabilityStore + Send,
{
    let mut errors = candidate.validate_fields();

    let Some(advertisement) = store.find_advertisement(candidate.advertisement_id).await? else {
        errors.add(
            "advertisement_id",
            codes::REQUIRED,
            "The advertisement does not exist.",
        );
        return Ok(Decision::Rejected(errors));
    };

    let Some(property) = store.find_property(advertisement.property_id).await? else {
        errors.add(
            "advertisement_id",
            codes::REQUIRED,
            "The advertised property does not exist.",
        );
        return Ok(Decision::Rejected(errors));
    };

    if let Some(exceeded) = check_capacity(candidate.guest_count, property.capacity) {
        errors.add(
            "guest_count",
            codes::CONFLICT,
            format!(
                "The property cannot accommodate all guests: the limit is {}, exceeded by {}.",
                exceeded.capacity, exceeded.overage
            ),
        );
    }

    // The overlap query is only meaningful over an ordered date pair.
    if candidate.checkin_date <= candidate.checkout_date {
        let exclude = match mode {
            ValidationMode::Create => None,
            ValidationMode::Update { reservation_id } => Some(reservation_id),
        };
        let conflicting = store
            .exists_conflicting(
                property.id,
                candidate.checkin_date,
                candidate.checkout_date,
                exclude,
                policy,
            )
            .await?;
        if conflicting {
            errors.add(
                NON_FIELD_ERRORS,
                codes::CONFLICT,
                "The property is not available for one or more days of the selected interval.",
            );
        }
    }

    if errors.is_empty() {
        Ok(Decision::Accepted {
            property_id: property.id,
        })
    } else {
        Ok(Decision::Rejected(errors))
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::overlap::overlaps;
    use crate::store::{AdvertisementRef, PropertyRef};

    struct StoredReservation {
        id: DbId,
        advertisement_id: DbId,
        checkin: NaiveDate,
        checkout: NaiveDate,
    }

    /// In-memory store mirroring the SQL existence query, for driving the
    /// pipeline without a database.
    #[derive(Default)]
    struct MemStore {
        advertisements: Vec<AdvertisementRef>,
        properties: Vec<PropertyRef>,
        reservations: Vec<StoredReservation>,
    }

    #[async_trait]
    impl AvailabilityStore for MemStore {
        type Error = Infallible;

        async fn find_advertisement(
            &mut self,
            id: DbId,
        ) -> Result<Option<AdvertisementRef>, Infallible> {
            Ok(self.advertisements.iter().copied().find(|a| a.id == id))
        }

        async fn find_property(&mut self, id: DbId) -> Result<Option<PropertyRef>, Infallible> {
            Ok(self.properties.iter().copied().find(|p| p.id == id))
        }

        async fn exists_conflicting(
            &mut self,
            property_id: DbId,
            checkin: NaiveDate,
            checkout: NaiveDate,
            exclude_reservation: Option<DbId>,
            policy: BoundaryPolicy,
        ) -> Result<bool, Infallible> {
            let advertisements = &self.advertisements;
            Ok(self.reservations.iter().any(|r| {
                if exclude_reservation == Some(r.id) {
                    return false;
                }
                let on_property = advertisements
                    .iter()
                    .any(|a| a.id == r.advertisement_id && a.property_id == property_id);
                on_property && overlaps(r.checkin, r.checkout, checkin, checkout, policy)
            }))
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    /// Property 1 (capacity 4) advertised twice (ads 10 and 11); property 2
    /// (capacity 2) advertised once (ad 20).
    fn store() -> MemStore {
        MemStore {
            advertisements: vec![
                AdvertisementRef {
                    id: 10,
                    property_id: 1,
                },
                AdvertisementRef {
                    id: 11,
                    property_id: 1,
                },
                AdvertisementRef {
                    id: 20,
                    property_id: 2,
                },
            ],
            properties: vec![
                PropertyRef {
                    id: 1,
                    capacity: 4,
                },
                PropertyRef {
                    id: 2,
                    capacity: 2,
                },
            ],
            reservations: vec![],
        }
    }

    fn candidate(advertisement_id: DbId, checkin: NaiveDate, checkout: NaiveDate) -> ReservationCandidate {
        ReservationCandidate {
            advertisement_id,
            checkin_date: checkin,
            checkout_date: checkout,
            total_price: Decimal::new(10000, 2),
            guest_count: 2,
        }
    }

    async fn run(
        store: &mut MemStore,
        candidate: &ReservationCandidate,
        mode: ValidationMode,
    ) -> Decision {
        validate_reservation(candidate, mode, BoundaryPolicy::Inclusive, store)
            .await
            .unwrap()
    }

    // -----------------------------------------------------------------------
    // Acceptance
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn accepts_valid_candidate() {
        let mut store = store();
        let decision = run(
            &mut store,
            &candidate(10, d(2024, 5, 8), d(2024, 5, 9)),
            ValidationMode::Create,
        )
        .await;
        assert_eq!(decision, Decision::Accepted { property_id: 1 });
    }

    #[tokio::test]
    async fn accepts_when_other_property_is_booked() {
        let mut store = store();
        store.reservations.push(StoredReservation {
            id: 1,
            advertisement_id: 10,
            checkin: d(2024, 5, 8),
            checkout: d(2024, 5, 9),
        });
        let decision = run(
            &mut store,
            &candidate(20, d(2024, 5, 8), d(2024, 5, 9)),
            ValidationMode::Create,
        )
        .await;
        assert_eq!(decision, Decision::Accepted { property_id: 2 });
    }

    // -----------------------------------------------------------------------
    // Advertisement resolution short-circuit
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn missing_advertisement_skips_dependent_checks() {
        let mut store = store();
        store.reservations.push(StoredReservation {
            id: 1,
            advertisement_id: 10,
            checkin: d(2024, 5, 8),
            checkout: d(2024, 5, 9),
        });
        let decision = run(
            &mut store,
            &candidate(99, d(2024, 5, 8), d(2024, 5, 9)),
            ValidationMode::Create,
        )
        .await;
        let Decision::Rejected(errors) = decision else {
            panic!("expected rejection");
        };
        assert_eq!(
            errors.field("advertisement_id").unwrap()[0].code,
            codes::REQUIRED,
        );
        assert!(errors.field(NON_FIELD_ERRORS).is_none());
    }

    #[tokio::test]
    async fn missing_advertisement_still_collects_field_errors() {
        let mut store = store();
        let mut bad = candidate(99, d(2024, 5, 8), d(2024, 5, 9));
        bad.total_price = Decimal::ZERO;
        let Decision::Rejected(errors) = run(&mut store, &bad, ValidationMode::Create).await else {
            panic!("expected rejection");
        };
        assert!(errors.field("total_price").is_some());
        assert!(errors.field("advertisement_id").is_some());
    }

    // -----------------------------------------------------------------------
    // Capacity
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn capacity_exceeded_reports_overage() {
        let mut store = store();
        let mut crowded = candidate(10, d(2024, 5, 8), d(2024, 5, 9));
        crowded.guest_count = 5;
        let Decision::Rejected(errors) = run(&mut store, &crowded, ValidationMode::Create).await
        else {
            panic!("expected rejection");
        };
        let error = &errors.field("guest_count").unwrap()[0];
        assert_eq!(error.code, codes::CONFLICT);
        assert!(error.message.contains("the limit is 4"));
        assert!(error.message.contains("exceeded by 1"));
    }

    #[tokio::test]
    async fn guest_count_at_capacity_accepted() {
        let mut store = store();
        let mut full = candidate(10, d(2024, 5, 8), d(2024, 5, 9));
        full.guest_count = 4;
        let decision = run(&mut store, &full, ValidationMode::Create).await;
        assert_eq!(decision, Decision::Accepted { property_id: 1 });
    }

    // -----------------------------------------------------------------------
    // Conflict query
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn overlapping_reservation_conflicts() {
        let mut store = store();
        store.reservations.push(StoredReservation {
            id: 1,
            advertisement_id: 10,
            checkin: d(2024, 3, 4),
            checkout: d(2024, 3, 9),
        });
        let Decision::Rejected(errors) = run(
            &mut store,
            &candidate(10, d(2024, 3, 7), d(2024, 3, 12)),
            ValidationMode::Create,
        )
        .await
        else {
            panic!("expected rejection");
        };
        assert_eq!(
            errors.field(NON_FIELD_ERRORS).unwrap()[0].code,
            codes::CONFLICT,
        );
    }

    #[tokio::test]
    async fn conflict_spans_advertisements_of_the_same_property() {
        let mut store = store();
        store.reservations.push(StoredReservation {
            id: 1,
            advertisement_id: 10,
            checkin: d(2024, 3, 4),
            checkout: d(2024, 3, 9),
        });
        // Same property, different advertisement.
        let Decision::Rejected(errors) = run(
            &mut store,
            &candidate(11, d(2024, 3, 4), d(2024, 3, 9)),
            ValidationMode::Create,
        )
        .await
        else {
            panic!("expected rejection");
        };
        assert!(errors.field(NON_FIELD_ERRORS).is_some());
    }

    #[tokio::test]
    async fn checkout_day_blocks_new_checkin_under_inclusive_policy() {
        let mut store = store();
        store.reservations.push(StoredReservation {
            id: 1,
            advertisement_id: 10,
            checkin: d(2024, 5, 5),
            checkout: d(2024, 5, 9),
        });
        let decision = run(
            &mut store,
            &candidate(10, d(2024, 5, 9), d(2024, 5, 12)),
            ValidationMode::Create,
        )
        .await;
        assert!(matches!(decision, Decision::Rejected(_)));
    }

    #[tokio::test]
    async fn one_day_gap_does_not_conflict() {
        let mut store = store();
        store.reservations.push(StoredReservation {
            id: 1,
            advertisement_id: 10,
            checkin: d(2024, 5, 8),
            checkout: d(2024, 5, 9),
        });
        let decision = run(
            &mut store,
            &candidate(10, d(2024, 5, 10), d(2024, 5, 11)),
            ValidationMode::Create,
        )
        .await;
        assert_eq!(decision, Decision::Accepted { property_id: 1 });
    }

    #[tokio::test]
    async fn exclusive_policy_allows_same_day_turnover() {
        let mut store = store();
        store.reservations.push(StoredReservation {
            id: 1,
            advertisement_id: 10,
            checkin: d(2024, 5, 5),
            checkout: d(2024, 5, 9),
        });
        let decision = validate_reservation(
            &candidate(10, d(2024, 5, 9), d(2024, 5, 12)),
            ValidationMode::Create,
            BoundaryPolicy::ExclusiveCheckout,
            &mut store,
        )
        .await
        .unwrap();
        assert_eq!(decision, Decision::Accepted { property_id: 1 });
    }

    // -----------------------------------------------------------------------
    // Update self-exclusion
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn update_does_not_conflict_with_itself() {
        let mut store = store();
        store.reservations.push(StoredReservation {
            id: 7,
            advertisement_id: 10,
            checkin: d(2024, 5, 8),
            checkout: d(2024, 5, 9),
        });
        // Same dates, e.g. only the price changed.
        let decision = run(
            &mut store,
            &candidate(10, d(2024, 5, 8), d(2024, 5, 9)),
            ValidationMode::Update { reservation_id: 7 },
        )
        .await;
        assert_eq!(decision, Decision::Accepted { property_id: 1 });
    }

    #[tokio::test]
    async fn update_still_conflicts_with_other_reservations() {
        let mut store = store();
        store.reservations.push(StoredReservation {
            id: 7,
            advertisement_id: 10,
            checkin: d(2024, 5, 8),
            checkout: d(2024, 5, 9),
        });
        store.reservations.push(StoredReservation {
            id: 8,
            advertisement_id: 11,
            checkin: d(2024, 5, 12),
            checkout: d(2024, 5, 14),
        });
        let decision = run(
            &mut store,
            &candidate(10, d(2024, 5, 13), d(2024, 5, 15)),
            ValidationMode::Update { reservation_id: 7 },
        )
        .await;
        assert!(matches!(decision, Decision::Rejected(_)));
    }

    // -----------------------------------------------------------------------
    // Accumulation and idempotence
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn capacity_and_conflict_both_reported() {
        let mut store = store();
        store.reservations.push(StoredReservation {
            id: 1,
            advertisement_id: 10,
            checkin: d(2024, 5, 8),
            checkout: d(2024, 5, 9),
        });
        let mut bad = candidate(11, d(2024, 5, 8), d(2024, 5, 9));
        bad.guest_count = 6;
        let Decision::Rejected(errors) = run(&mut store, &bad, ValidationMode::Create).await else {
            panic!("expected rejection");
        };
        assert!(errors.field("guest_count").is_some());
        assert!(errors.field(NON_FIELD_ERRORS).is_some());
    }

    #[tokio::test]
    async fn inverted_dates_skip_the_overlap_query() {
        let mut store = store();
        store.reservations.push(StoredReservation {
            id: 1,
            advertisement_id: 10,
            checkin: d(2024, 5, 8),
            checkout: d(2024, 5, 9),
        });
        let Decision::Rejected(errors) = run(
            &mut store,
            &candidate(10, d(2024, 5, 9), d(2024, 5, 8)),
            ValidationMode::Create,
        )
        .await
        else {
            panic!("expected rejection");
        };
        assert!(errors.field("checkin_date").is_some());
        assert!(errors.field(NON_FIELD_ERRORS).is_none());
    }

    #[tokio::test]
    async fn rejected_candidate_validates_identically_twice() {
        let mut store = store();
        store.reservations.push(StoredReservation {
            id: 1,
            advertisement_id: 10,
            checkin: d(2024, 5, 8),
            checkout: d(2024, 5, 9),
        });
        let mut bad = candidate(11, d(2024, 5, 8), d(2024, 5, 9));
        bad.guest_count = 0;
        let first = run(&mut store, &bad, ValidationMode::Create).await;
        let second = run(&mut store, &bad, ValidationMode::Create).await;
        assert_eq!(first, second);
        assert!(matches!(first, Decision::Rejected(_)));
    }
}
