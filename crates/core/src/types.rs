/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Opaque public identifier for a reservation.
///
/// Generated server-side at creation, stored as a unique secondary key.
/// The internal sequence id never leaves the system as a reservation handle.
pub type ReservationCode = uuid::Uuid;
