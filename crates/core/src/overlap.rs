//! Date-range overlap predicate for reservations.

use chrono::NaiveDate;

/// How a checkout and a check-in falling on the same calendar day are
/// treated by the conflict query.
///
/// This is configuration on the conflict query, not a hardcoded branch: the
/// API server picks the policy once at startup and threads it through every
/// availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// A reservation ending on day D blocks a new reservation starting on
    /// day D. The stricter rule and the default.
    #[default]
    Inclusive,
    /// Same-day turnover: a checkout on day D does not block a new check-in
    /// on day D.
    ExclusiveCheckout,
}

/// Whether two date ranges conflict under the given boundary policy.
///
/// Ranges are closed on both ends (`start..=end`); callers guarantee
/// `start <= end` for each range. A same-day stay is the degenerate
/// single-day range.
pub fn overlaps(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
    policy: BoundaryPolicy,
) -> bool {
    match policy {
        BoundaryPolicy::Inclusive => a_end >= b_start && a_start <= b_end,
        BoundaryPolicy::ExclusiveCheckout => a_end > b_start && a_start < b_end,
    }
}
