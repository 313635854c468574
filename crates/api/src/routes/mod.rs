pub mod advertisements;
pub mod health;
pub mod properties;
pub mod reservations;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /properties                    GET list, POST create
/// /properties/{id}               GET, PUT, DELETE (cascades)
///
/// /advertisements                GET list, POST create
/// /advertisements/{id}           GET, PUT
///
/// /reservations                  GET list, POST create
/// /reservations/{id}             GET, PUT, DELETE (always 405)
/// /reservations/by-code/{code}   GET
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/properties", properties::router())
        .nest("/advertisements", advertisements::router())
        .nest("/reservations", reservations::router())
}
