//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Writes re-run the core field
//! validation before touching a row; the reservation write path additionally
//! runs the full availability pipeline inside its transaction.

pub mod advertisement_repo;
pub mod availability;
pub mod property_repo;
pub mod reservation_repo;

pub use advertisement_repo::AdvertisementRepo;
pub use availability::PgAvailability;
pub use property_repo::PropertyRepo;
pub use reservation_repo::ReservationRepo;
