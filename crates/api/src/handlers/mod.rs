//! Request handlers, one module per resource.

pub mod advertisements;
pub mod properties;
pub mod reservations;
