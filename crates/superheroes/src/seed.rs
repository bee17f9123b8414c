//! Database seeding.
//!
//! Replaces the contents of the store with the fixture heroes and powers and
//! gives every hero a few random powers.

use rand::{seq::IndexedRandom, Rng};

use superheroes_core::heroes::{
    seed_heroes, seed_powers, NewHeroPower, Strength, MAX_POWERS_PER_HERO,
};
use superheroes_core::storage::{HeroPowerRepository, Result, SeedRepository};

/// Row counts written by [`seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub heroes: usize,
    pub powers: usize,
    pub hero_powers: usize,
}

/// Picks between one and [`MAX_POWERS_PER_HERO`] distinct powers per hero,
/// each at a random strength.
pub fn plan_hero_powers<R: Rng + ?Sized>(
    hero_ids: &[i64],
    power_ids: &[i64],
    rng: &mut R,
) -> Vec<NewHeroPower> {
    if power_ids.is_empty() {
        return Vec::new();
    }

    let max = MAX_POWERS_PER_HERO.min(power_ids.len());
    let mut planned = Vec::new();

    for &hero_id in hero_ids {
        let count = rng.random_range(1..=max);
        for &power_id in power_ids.choose_multiple(rng, count) {
            let strength = *Strength::ALL.choose(rng).unwrap_or(&Strength::Average);
            planned.push(NewHeroPower {
                hero_id,
                power_id,
                strength,
            });
        }
    }

    planned
}

/// Resets the store and writes the fixture data.
pub async fn seed<R>(repo: &R) -> Result<SeedSummary>
where
    R: SeedRepository + HeroPowerRepository,
{
    tracing::info!("Clearing existing data");
    repo.reset().await?;

    let mut hero_ids = Vec::new();
    for hero in seed_heroes() {
        hero_ids.push(repo.insert_hero(&hero).await?.id);
    }

    let mut power_ids = Vec::new();
    for power in seed_powers() {
        power_ids.push(repo.insert_power(&power).await?.id);
    }

    let planned = plan_hero_powers(&hero_ids, &power_ids, &mut rand::rng());
    for hero_power in &planned {
        repo.create_hero_power(hero_power).await?;
    }

    Ok(SeedSummary {
        heroes: hero_ids.len(),
        powers: power_ids.len(),
        hero_powers: planned.len(),
    })
}
