//! Response shapes, one per endpoint.
//!
//! Heroes and powers reference each other through hero powers, so a naive
//! recursive serialization never terminates. Each view below nests exactly as
//! deep as its endpoint needs and no further.

use serde::Serialize;

use super::types::{Hero, HeroPower, Power, Strength};

/// A hero without relationships (GET /heroes, nested hero objects).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroSummary {
    pub id: i64,
    pub name: String,
    pub super_name: String,
}

impl From<Hero> for HeroSummary {
    fn from(hero: Hero) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            super_name: hero.super_name,
        }
    }
}

/// A power without relationships (GET /powers, GET /powers/{id}).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PowerSummary {
    pub id: i64,
    pub description: String,
}

impl From<Power> for PowerSummary {
    fn from(power: Power) -> Self {
        Self {
            id: power.id,
            description: power.description,
        }
    }
}

/// A hero power seen from its hero: carries the power, omits the hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroPowerWithPower {
    pub id: i64,
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: Strength,
    pub power: PowerSummary,
}

/// A hero power seen from its power: carries the hero, omits the power.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroPowerWithHero {
    pub id: i64,
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: Strength,
    pub hero: HeroSummary,
}

/// A hero with its powers (GET /heroes/{id}).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroDetail {
    pub id: i64,
    pub name: String,
    pub super_name: String,
    pub hero_powers: Vec<HeroPowerWithPower>,
}

impl HeroDetail {
    /// Builds the view from a hero and its associations paired with their powers.
    pub fn new(hero: Hero, hero_powers: Vec<(HeroPower, Power)>) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            super_name: hero.super_name,
            hero_powers: hero_powers
                .into_iter()
                .map(|(hero_power, power)| HeroPowerWithPower {
                    id: hero_power.id,
                    hero_id: hero_power.hero_id,
                    power_id: hero_power.power_id,
                    strength: hero_power.strength,
                    power: power.into(),
                })
                .collect(),
        }
    }
}

/// A power with the heroes that hold it (PATCH /powers/{id}).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PowerDetail {
    pub id: i64,
    pub description: String,
    pub hero_powers: Vec<HeroPowerWithHero>,
}

impl PowerDetail {
    /// Builds the view from a power and its associations paired with their heroes.
    pub fn new(power: Power, hero_powers: Vec<(HeroPower, Hero)>) -> Self {
        Self {
            id: power.id,
            description: power.description,
            hero_powers: hero_powers
                .into_iter()
                .map(|(hero_power, hero)| HeroPowerWithHero {
                    id: hero_power.id,
                    hero_id: hero_power.hero_id,
                    power_id: hero_power.power_id,
                    strength: hero_power.strength,
                    hero: hero.into(),
                })
                .collect(),
        }
    }
}

/// A freshly created hero power with both ends (POST /hero_powers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroPowerDetail {
    pub id: i64,
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: Strength,
    pub hero: HeroSummary,
    pub power: PowerSummary,
}

impl HeroPowerDetail {
    pub fn new(hero_power: HeroPower, hero: Hero, power: Power) -> Self {
        Self {
            id: hero_power.id,
            hero_id: hero_power.hero_id,
            power_id: hero_power.power_id,
            strength: hero_power.strength,
            hero: hero.into(),
            power: power.into(),
        }
    }
}
