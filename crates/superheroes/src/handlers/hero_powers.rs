//! Hero power handlers.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use superheroes_core::heroes::{CreateHeroPowerRequest, HeroPowerDetail, NewHeroPower};

use super::error::{ApiError, HERO_OR_POWER_NOT_FOUND};
use crate::state::AppState;

/// Create a hero power (POST /hero_powers).
///
/// Strength is validated before any lookup. A missing hero or power answers
/// 404 without saying which one. Success answers 200 with the new row and
/// both of its ends.
pub async fn create_hero_power(
    State(state): State<AppState>,
    payload: Result<Json<CreateHeroPowerRequest>, JsonRejection>,
) -> Result<Json<HeroPowerDetail>, ApiError> {
    let Json(payload) = payload?;
    tracing::debug!(payload = ?payload, "Received create hero power request");

    let strength = payload.validate()?;

    let hero = match payload.hero_id {
        Some(id) => state.heroes.get_hero(id).await?,
        None => None,
    };
    let power = match payload.power_id {
        Some(id) => state.powers.get_power(id).await?,
        None => None,
    };
    let (Some(hero), Some(power)) = (hero, power) else {
        tracing::warn!(
            hero_id = ?payload.hero_id,
            power_id = ?payload.power_id,
            "Hero or power not found"
        );
        return Err(ApiError::NotFound(HERO_OR_POWER_NOT_FOUND));
    };

    let hero_power = state
        .hero_powers
        .create_hero_power(&NewHeroPower {
            hero_id: hero.id,
            power_id: power.id,
            strength,
        })
        .await?;

    tracing::info!(
        hero_power_id = hero_power.id,
        hero_id = hero.id,
        power_id = power.id,
        strength = %strength,
        "Created hero power"
    );

    Ok(Json(HeroPowerDetail::new(hero_power, hero, power)))
}
