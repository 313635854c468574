use crate::types::DbId;

/// Domain-level errors surfaced to the HTTP layer.
///
/// Every failure in the core is a value returned to the caller, never an
/// unhandled abort.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
