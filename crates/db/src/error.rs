use staybook_core::validation::ValidationErrors;

/// Error type for the validated write paths.
///
/// A rejection is a decision, not a storage failure: it carries the full
/// field-keyed error set so the caller gets every problem in one round trip,
/// and it is only ever produced before any row was touched.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("validation rejected the candidate")]
    Rejected(ValidationErrors),

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}
