//! Reservation validation: field-scoped checks, error accumulation, and the
//! ordered pipeline run before any write.

pub mod entity;
pub mod errors;
pub mod pipeline;

pub use entity::{AdvertisementInput, PropertyInput, ReservationCandidate};
pub use errors::{codes, FieldError, ValidationErrors, NON_FIELD_ERRORS};
pub use pipeline::{validate_reservation, Decision, ValidationMode};
