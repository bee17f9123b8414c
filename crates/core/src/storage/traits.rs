use async_trait::async_trait;

use crate::heroes::{Hero, HeroPower, NewHero, NewHeroPower, NewPower, Power};

use super::Result;

/// Read access to heroes.
#[async_trait]
pub trait HeroRepository: Send + Sync {
    /// Lists every hero in storage order.
    async fn list_heroes(&self) -> Result<Vec<Hero>>;

    /// Gets a hero by its ID. Returns `None` when no row matches.
    async fn get_hero(&self, id: i64) -> Result<Option<Hero>>;
}

/// Read access to powers plus description updates.
#[async_trait]
pub trait PowerRepository: Send + Sync {
    /// Lists every power in storage order.
    async fn list_powers(&self) -> Result<Vec<Power>>;

    /// Gets a power by its ID. Returns `None` when no row matches.
    async fn get_power(&self, id: i64) -> Result<Option<Power>>;

    /// Persists the description of an existing power.
    async fn update_power(&self, power: &Power) -> Result<()>;
}

/// Hero power associations.
#[async_trait]
pub trait HeroPowerRepository: Send + Sync {
    /// Inserts an association and returns it with its assigned ID.
    ///
    /// Callers are expected to have checked that both referenced rows exist.
    async fn create_hero_power(&self, hero_power: &NewHeroPower) -> Result<HeroPower>;

    /// Gets all associations of a hero, each paired with its power.
    async fn hero_powers_for_hero(&self, hero_id: i64) -> Result<Vec<(HeroPower, Power)>>;

    /// Gets all associations of a power, each paired with its hero.
    async fn hero_powers_for_power(&self, power_id: i64) -> Result<Vec<(HeroPower, Hero)>>;
}

/// Bulk writes used only by the seed command.
#[async_trait]
pub trait SeedRepository: Send + Sync {
    /// Deletes every hero, power and hero power.
    async fn reset(&self) -> Result<()>;

    /// Inserts a hero and returns it with its assigned ID.
    async fn insert_hero(&self, hero: &NewHero) -> Result<Hero>;

    /// Inserts a power and returns it with its assigned ID.
    async fn insert_power(&self, power: &NewPower) -> Result<Power>;
}
