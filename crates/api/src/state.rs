use std::sync::Arc;

use staybook_core::overlap::BoundaryPolicy;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: staybook_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// The configured checkout boundary policy for conflict queries.
    pub fn boundary_policy(&self) -> BoundaryPolicy {
        self.config.boundary_policy()
    }
}
