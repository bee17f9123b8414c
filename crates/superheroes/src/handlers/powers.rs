//! Power handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use superheroes_core::heroes::{PowerDetail, PowerSummary, UpdatePowerRequest};

use super::error::{ApiError, POWER_NOT_FOUND};
use crate::state::AppState;

/// List all powers without their heroes (GET /powers).
pub async fn list_powers(
    State(state): State<AppState>,
) -> Result<Json<Vec<PowerSummary>>, ApiError> {
    let powers = state.powers.list_powers().await?;

    Ok(Json(powers.into_iter().map(PowerSummary::from).collect()))
}

/// Get a single power without its heroes (GET /powers/{id}).
pub async fn get_power(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<PowerSummary>, ApiError> {
    let Ok(Path(id)) = id else {
        return Err(ApiError::NotFound(POWER_NOT_FOUND));
    };

    state
        .powers
        .get_power(id)
        .await?
        .map(|power| Json(PowerSummary::from(power)))
        .ok_or(ApiError::NotFound(POWER_NOT_FOUND))
}

/// Update a power's description (PATCH /powers/{id}).
///
/// The power must exist before the body is looked at, so an unknown id answers
/// 404 even when the body is invalid. The response carries the power's hero
/// powers with their heroes.
pub async fn update_power(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdatePowerRequest>, JsonRejection>,
) -> Result<Json<PowerDetail>, ApiError> {
    let Ok(Path(id)) = id else {
        return Err(ApiError::NotFound(POWER_NOT_FOUND));
    };

    let mut power = state
        .powers
        .get_power(id)
        .await?
        .ok_or(ApiError::NotFound(POWER_NOT_FOUND))?;

    let Json(payload) = payload?;
    payload.apply_to(&mut power)?;

    state.powers.update_power(&power).await?;
    tracing::info!(power_id = id, "Updated power");

    let hero_powers = state.hero_powers.hero_powers_for_power(id).await?;

    Ok(Json(PowerDetail::new(power, hero_powers)))
}
