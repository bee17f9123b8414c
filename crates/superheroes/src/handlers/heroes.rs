//! Hero handlers.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use superheroes_core::heroes::{HeroDetail, HeroSummary};

use super::error::{ApiError, HERO_NOT_FOUND};
use crate::state::AppState;

/// List all heroes without their powers (GET /heroes).
pub async fn list_heroes(
    State(state): State<AppState>,
) -> Result<Json<Vec<HeroSummary>>, ApiError> {
    let heroes = state.heroes.list_heroes().await?;

    Ok(Json(heroes.into_iter().map(HeroSummary::from).collect()))
}

/// Get a hero with its hero powers and their powers (GET /heroes/{id}).
///
/// An id that is not an integer cannot match any hero and answers 404.
pub async fn get_hero(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<HeroDetail>, ApiError> {
    let Ok(Path(id)) = id else {
        return Err(ApiError::NotFound(HERO_NOT_FOUND));
    };

    let hero = state
        .heroes
        .get_hero(id)
        .await?
        .ok_or(ApiError::NotFound(HERO_NOT_FOUND))?;

    let hero_powers = state.hero_powers.hero_powers_for_hero(id).await?;

    Ok(Json(HeroDetail::new(hero, hero_powers)))
}
