//! Route definitions for the `/advertisements` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::advertisements;
use crate::state::AppState;

/// Routes mounted at `/advertisements`. No delete route exists.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(advertisements::list).post(advertisements::create),
        )
        .route(
            "/{id}",
            get(advertisements::get_by_id).put(advertisements::update),
        )
}
