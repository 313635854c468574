//! Handlers for the `/properties` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use staybook_core::error::CoreError;
use staybook_core::types::DbId;
use staybook_db::models::property::{CreateProperty, Property, UpdateProperty};
use staybook_db::repositories::PropertyRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/properties
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProperty>,
) -> AppResult<(StatusCode, Json<Property>)> {
    let property = PropertyRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(property)))
}

/// GET /api/v1/properties
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Property>>> {
    let properties = PropertyRepo::list(&state.pool).await?;
    Ok(Json(properties))
}

/// GET /api/v1/properties/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Property>> {
    let property = PropertyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }))?;
    Ok(Json(property))
}

/// PUT /api/v1/properties/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProperty>,
) -> AppResult<Json<Property>> {
    let property = PropertyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }))?;
    Ok(Json(property))
}

/// DELETE /api/v1/properties/{id}
///
/// Cascades to the property's advertisements and their reservations.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PropertyRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Property",
            id,
        }))
    }
}
