//! Structured, field-keyed validation errors.

use std::collections::BTreeMap;

use serde::Serialize;

/// Error codes callers match on. Part of the API contract, not free text.
pub mod codes {
    /// A required field or referenced record is missing.
    pub const REQUIRED: &str = "required";
    /// A numeric or date field is below its minimum.
    pub const MIN_VALUE: &str = "min_value";
    /// A unique value is already taken.
    pub const UNIQUE: &str = "unique";
    /// A business-rule conflict: date overlap or capacity exceeded.
    pub const CONFLICT: &str = "conflict";
}

/// Bucket for errors that do not belong to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// A single validation error with its machine-readable code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub code: &'static str,
    pub message: String,
}

/// Field-keyed accumulated validation errors.
///
/// Empty means the candidate passed. Serializes to
/// `{"field": [{"code": ..., "message": ...}], ...}` so callers get the
/// complete error set in one round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, Vec<FieldError>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error against a field (or [`NON_FIELD_ERRORS`]).
    pub fn add(&mut self, field: &'static str, code: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(FieldError {
            code,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one error.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Errors recorded against one field, if any.
    pub fn field(&self, field: &str) -> Option<&[FieldError]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Fold another error set into this one, preserving per-field order.
    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, errors) in other.0 {
            self.0.entry(field).or_default().extend(errors);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_valid() {
        assert!(ValidationErrors::new().is_empty());
    }

    #[test]
    fn serializes_field_keyed() {
        let mut errors = ValidationErrors::new();
        errors.add("guest_count", codes::MIN_VALUE, "too few guests");
        errors.add(NON_FIELD_ERRORS, codes::CONFLICT, "not available");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["guest_count"][0]["code"], "min_value");
        assert_eq!(json["non_field_errors"][0]["code"], "conflict");
        assert_eq!(json["non_field_errors"][0]["message"], "not available");
    }

    #[test]
    fn merge_appends_to_existing_field() {
        let mut a = ValidationErrors::new();
        a.add("total_price", codes::MIN_VALUE, "first");
        let mut b = ValidationErrors::new();
        b.add("total_price", codes::REQUIRED, "second");
        b.add("guest_count", codes::MIN_VALUE, "third");

        a.merge(b);
        assert_eq!(a.field("total_price").unwrap().len(), 2);
        assert_eq!(a.len(), 2);
    }
}
