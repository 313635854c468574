//! Guest-count capacity check.

/// Quantified overage for a rejected guest count, so callers can render a
/// precise message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded {
    /// The property's configured capacity.
    pub capacity: i32,
    /// How many guests over the limit the request is.
    pub overage: i32,
}

/// Check a requested guest count against a property's capacity.
///
/// Returns `None` when the property accommodates the request. Pure; the
/// capacity lookup happens upstream when the advertisement is resolved.
pub fn check_capacity(guest_count: i32, capacity: i32) -> Option<CapacityExceeded> {
    if guest_count > capacity {
        Some(CapacityExceeded {
            capacity,
            overage: guest_count - capacity,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn under_capacity_accepts() {
        assert_eq!(check_capacity(2, 4), None);
    }

    #[test]
    fn at_capacity_accepts() {
        assert_eq!(check_capacity(4, 4), None);
    }

    #[test]
    fn one_over_capacity_rejects_with_overage_one() {
        assert_eq!(
            check_capacity(5, 4),
            Some(CapacityExceeded {
                capacity: 4,
                overage: 1,
            }),
        );
    }

    #[test]
    fn far_over_capacity_reports_full_overage() {
        assert_eq!(
            check_capacity(10, 3),
            Some(CapacityExceeded {
                capacity: 3,
                overage: 7,
            }),
        );
    }
}
