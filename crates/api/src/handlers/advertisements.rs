//! Handlers for the `/advertisements` resource.
//!
//! There is no delete endpoint; advertisements only leave the system when
//! their property is deleted.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use staybook_core::error::CoreError;
use staybook_core::types::DbId;
use staybook_db::models::advertisement::{
    Advertisement, CreateAdvertisement, UpdateAdvertisement,
};
use staybook_db::repositories::AdvertisementRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/advertisements
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAdvertisement>,
) -> AppResult<(StatusCode, Json<Advertisement>)> {
    let advertisement = AdvertisementRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(advertisement)))
}

/// GET /api/v1/advertisements
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Advertisement>>> {
    let advertisements = AdvertisementRepo::list(&state.pool).await?;
    Ok(Json(advertisements))
}

/// GET /api/v1/advertisements/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Advertisement>> {
    let advertisement = AdvertisementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Advertisement",
            id,
        }))?;
    Ok(Json(advertisement))
}

/// PUT /api/v1/advertisements/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAdvertisement>,
) -> AppResult<Json<Advertisement>> {
    let advertisement = AdvertisementRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Advertisement",
            id,
        }))?;
    Ok(Json(advertisement))
}
