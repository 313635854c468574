//! Field-scoped entity checks, independent of any other record.
//!
//! These run before any persistence attempt, on the write path as well as at
//! the API boundary. Side-effect free.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::types::DbId;
use crate::validation::errors::{codes, ValidationErrors};

/// Candidate fields for creating or replacing a property.
#[derive(Debug, Clone)]
pub struct PropertyInput {
    pub capacity: i32,
    pub bathrooms: i32,
    pub cleaning_fee: Decimal,
}

impl PropertyInput {
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self.capacity < 1 {
            errors.add(
                "capacity",
                codes::MIN_VALUE,
                "The property must accommodate at least one guest.",
            );
        }
        if self.bathrooms < 0 {
            errors.add(
                "bathrooms",
                codes::MIN_VALUE,
                "The bathroom count cannot be negative.",
            );
        }
        if self.cleaning_fee < Decimal::ZERO {
            errors.add(
                "cleaning_fee",
                codes::MIN_VALUE,
                "The cleaning fee cannot be negative.",
            );
        }
        errors
    }
}

/// Candidate fields for creating or replacing an advertisement.
#[derive(Debug, Clone)]
pub struct AdvertisementInput {
    pub platform: String,
    pub platform_fee: Decimal,
}

impl AdvertisementInput {
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self.platform.trim().is_empty() {
            errors.add("platform", codes::REQUIRED, "The platform name is required.");
        }
        if self.platform_fee < Decimal::ZERO {
            errors.add(
                "platform_fee",
                codes::MIN_VALUE,
                "The platform fee cannot be negative.",
            );
        }
        errors
    }
}

/// A proposed reservation, before persistence.
///
/// Check-in equal to check-out is the minimum valid range (same-day stay).
#[derive(Debug, Clone)]
pub struct ReservationCandidate {
    pub advertisement_id: DbId,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    pub total_price: Decimal,
    pub guest_count: i32,
}

impl ReservationCandidate {
    /// Structural field checks. Dates and numeric bounds collect
    /// independently; nothing here touches storage.
    pub fn validate_fields(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self.checkin_date > self.checkout_date {
            errors.add(
                "checkin_date",
                codes::MIN_VALUE,
                "The check-in date cannot be after the check-out date.",
            );
        }
        // Strictly positive to two decimal places.
        if self.total_price < Decimal::new(1, 2) {
            errors.add(
                "total_price",
                codes::MIN_VALUE,
                "The total price must be at least 0.01.",
            );
        }
        if self.guest_count < 1 {
            errors.add(
                "guest_count",
                codes::MIN_VALUE,
                "The reservation must have at least one guest.",
            );
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn valid_candidate() -> ReservationCandidate {
        ReservationCandidate {
            advertisement_id: 1,
            checkin_date: d(2024, 5, 8),
            checkout_date: d(2024, 5, 9),
            total_price: Decimal::new(10000, 2),
            guest_count: 2,
        }
    }

    // -----------------------------------------------------------------------
    // Property
    // -----------------------------------------------------------------------

    #[test]
    fn property_with_zero_capacity_rejected() {
        let input = PropertyInput {
            capacity: 0,
            bathrooms: 1,
            cleaning_fee: Decimal::ZERO,
        };
        let errors = input.validate();
        assert_eq!(errors.field("capacity").unwrap()[0].code, codes::MIN_VALUE);
    }

    #[test]
    fn property_with_negative_fee_rejected() {
        let input = PropertyInput {
            capacity: 2,
            bathrooms: 1,
            cleaning_fee: Decimal::new(-100, 2),
        };
        let errors = input.validate();
        assert!(errors.field("cleaning_fee").is_some());
        assert!(errors.field("capacity").is_none());
    }

    #[test]
    fn valid_property_passes() {
        let input = PropertyInput {
            capacity: 1,
            bathrooms: 0,
            cleaning_fee: Decimal::ZERO,
        };
        assert!(input.validate().is_empty());
    }

    // -----------------------------------------------------------------------
    // Advertisement
    // -----------------------------------------------------------------------

    #[test]
    fn blank_platform_rejected() {
        let input = AdvertisementInput {
            platform: "  ".to_string(),
            platform_fee: Decimal::ZERO,
        };
        let errors = input.validate();
        assert_eq!(errors.field("platform").unwrap()[0].code, codes::REQUIRED);
    }

    #[test]
    fn negative_platform_fee_rejected() {
        let input = AdvertisementInput {
            platform: "airbnb".to_string(),
            platform_fee: Decimal::new(-1, 2),
        };
        assert!(input.validate().field("platform_fee").is_some());
    }

    // -----------------------------------------------------------------------
    // Reservation candidate
    // -----------------------------------------------------------------------

    #[test]
    fn same_day_stay_is_valid() {
        let mut candidate = valid_candidate();
        candidate.checkout_date = candidate.checkin_date;
        assert!(candidate.validate_fields().is_empty());
    }

    #[test]
    fn inverted_dates_rejected_on_checkin_field() {
        let mut candidate = valid_candidate();
        candidate.checkin_date = d(2024, 5, 10);
        let errors = candidate.validate_fields();
        assert!(errors.field("checkin_date").is_some());
    }

    #[test]
    fn zero_price_rejected() {
        let mut candidate = valid_candidate();
        candidate.total_price = Decimal::ZERO;
        let errors = candidate.validate_fields();
        assert_eq!(errors.field("total_price").unwrap()[0].code, codes::MIN_VALUE);
    }

    #[test]
    fn one_cent_price_accepted() {
        let mut candidate = valid_candidate();
        candidate.total_price = Decimal::new(1, 2);
        assert!(candidate.validate_fields().is_empty());
    }

    #[test]
    fn all_field_errors_collected_in_one_pass() {
        let candidate = ReservationCandidate {
            advertisement_id: 1,
            checkin_date: d(2024, 5, 10),
            checkout_date: d(2024, 5, 8),
            total_price: Decimal::ZERO,
            guest_count: 0,
        };
        let errors = candidate.validate_fields();
        assert_eq!(errors.len(), 3);
        assert!(errors.field("checkin_date").is_some());
        assert!(errors.field("total_price").is_some());
        assert!(errors.field("guest_count").is_some());
    }
}
