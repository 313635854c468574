//! Route definitions for the `/reservations` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::reservations;
use crate::state::AppState;

/// Routes mounted at `/reservations`.
///
/// The delete route is mounted so the rejection is deliberate (405 with a
/// JSON body) rather than an incidental routing hole.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete (always 405)
/// GET    /by-code/{code}    -> get_by_code
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reservations::list).post(reservations::create))
        .route("/by-code/{code}", get(reservations::get_by_code))
        .route(
            "/{id}",
            get(reservations::get_by_id)
                .put(reservations::update)
                .delete(reservations::delete),
        )
}
