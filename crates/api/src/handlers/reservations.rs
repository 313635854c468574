//! Handlers for the `/reservations` resource.
//!
//! Create and update run the availability pipeline inside the repository's
//! transaction. Delete is unconditionally rejected: a reservation can be
//! rescheduled but not cancelled.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use staybook_core::error::CoreError;
use staybook_core::types::{DbId, ReservationCode};
use staybook_db::models::reservation::{CreateReservation, Reservation, UpdateReservation};
use staybook_db::repositories::ReservationRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/reservations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateReservation>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    let policy = state.boundary_policy();
    let reservation = ReservationRepo::create(&state.pool, &input, policy).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// GET /api/v1/reservations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = ReservationRepo::list(&state.pool).await?;
    Ok(Json(reservations))
}

/// GET /api/v1/reservations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Reservation>> {
    let reservation = ReservationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        }))?;
    Ok(Json(reservation))
}

/// GET /api/v1/reservations/by-code/{code}
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<ReservationCode>,
) -> AppResult<Json<Reservation>> {
    let reservation = ReservationRepo::find_by_code(&state.pool, code)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Reservation with code {code} not found")))?;
    Ok(Json(reservation))
}

/// PUT /api/v1/reservations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReservation>,
) -> AppResult<Json<Reservation>> {
    let policy = state.boundary_policy();
    let reservation = ReservationRepo::update(&state.pool, id, &input, policy)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        }))?;
    Ok(Json(reservation))
}

/// DELETE /api/v1/reservations/{id} -- unconditionally rejected.
pub async fn delete() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({
            "error": "Reservations cannot be deleted.",
            "code": "METHOD_NOT_ALLOWED",
        })),
    )
}
