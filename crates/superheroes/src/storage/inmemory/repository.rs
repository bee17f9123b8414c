//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use superheroes_core::heroes::{Hero, HeroPower, NewHero, NewHeroPower, NewPower, Power};
use superheroes_core::storage::{
    HeroPowerRepository, HeroRepository, PowerRepository, RepositoryError, Result,
    SeedRepository,
};

#[derive(Debug, Default)]
struct Tables {
    heroes: BTreeMap<i64, Hero>,
    powers: BTreeMap<i64, Power>,
    hero_powers: BTreeMap<i64, HeroPower>,
    next_hero_id: i64,
    next_power_id: i64,
    next_hero_power_id: i64,
}

fn next_id(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

/// In-memory storage backend for testing.
///
/// All tables sit behind one `RwLock` so that a write and the referential
/// checks it makes happen atomically. IDs start at 1 and are never reused.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HeroRepository for InMemoryRepository {
    async fn list_heroes(&self) -> Result<Vec<Hero>> {
        Ok(self.tables.read().await.heroes.values().cloned().collect())
    }

    async fn get_hero(&self, id: i64) -> Result<Option<Hero>> {
        Ok(self.tables.read().await.heroes.get(&id).cloned())
    }
}

#[async_trait]
impl PowerRepository for InMemoryRepository {
    async fn list_powers(&self) -> Result<Vec<Power>> {
        Ok(self.tables.read().await.powers.values().cloned().collect())
    }

    async fn get_power(&self, id: i64) -> Result<Option<Power>> {
        Ok(self.tables.read().await.powers.get(&id).cloned())
    }

    async fn update_power(&self, power: &Power) -> Result<()> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .powers
            .get_mut(&power.id)
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "Power",
                id: power.id.to_string(),
            })?;
        stored.description = power.description.clone();
        Ok(())
    }
}

#[async_trait]
impl HeroPowerRepository for InMemoryRepository {
    async fn create_hero_power(&self, hero_power: &NewHeroPower) -> Result<HeroPower> {
        let mut tables = self.tables.write().await;

        if !tables.heroes.contains_key(&hero_power.hero_id)
            || !tables.powers.contains_key(&hero_power.power_id)
        {
            return Err(RepositoryError::InvalidData(
                "Foreign key constraint violation for HeroPower".to_string(),
            ));
        }

        let id = next_id(&mut tables.next_hero_power_id);
        let created = hero_power.with_id(id);
        tables.hero_powers.insert(id, created.clone());
        Ok(created)
    }

    async fn hero_powers_for_hero(&self, hero_id: i64) -> Result<Vec<(HeroPower, Power)>> {
        let tables = self.tables.read().await;
        Ok(tables
            .hero_powers
            .values()
            .filter(|hp| hp.hero_id == hero_id)
            .filter_map(|hp| {
                tables
                    .powers
                    .get(&hp.power_id)
                    .map(|power| (hp.clone(), power.clone()))
            })
            .collect())
    }

    async fn hero_powers_for_power(&self, power_id: i64) -> Result<Vec<(HeroPower, Hero)>> {
        let tables = self.tables.read().await;
        Ok(tables
            .hero_powers
            .values()
            .filter(|hp| hp.power_id == power_id)
            .filter_map(|hp| {
                tables
                    .heroes
                    .get(&hp.hero_id)
                    .map(|hero| (hp.clone(), hero.clone()))
            })
            .collect())
    }
}

#[async_trait]
impl SeedRepository for InMemoryRepository {
    async fn reset(&self) -> Result<()> {
        *self.tables.write().await = Tables::default();
        Ok(())
    }

    async fn insert_hero(&self, hero: &NewHero) -> Result<Hero> {
        let mut tables = self.tables.write().await;
        let created = hero.clone().with_id(next_id(&mut tables.next_hero_id));
        tables.heroes.insert(created.id, created.clone());
        Ok(created)
    }

    async fn insert_power(&self, power: &NewPower) -> Result<Power> {
        let mut tables = self.tables.write().await;
        let created = power.clone().with_id(next_id(&mut tables.next_power_id));
        tables.powers.insert(created.id, created.clone());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use superheroes_core::heroes::Strength;

    use super::*;

    #[tokio::test]
    async fn test_ids_are_assigned_sequentially() {
        let repo = InMemoryRepository::new();

        let first = repo.insert_hero(&NewHero::new("a", "A")).await.unwrap();
        let second = repo.insert_hero(&NewHero::new("b", "B")).await.unwrap();

        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(repo.list_heroes().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_create_hero_power_requires_existing_rows() {
        let repo = InMemoryRepository::new();
        repo.insert_hero(&NewHero::new("a", "A")).await.unwrap();

        let result = repo
            .create_hero_power(&NewHeroPower {
                hero_id: 1,
                power_id: 1,
                strength: Strength::Weak,
            })
            .await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_update_missing_power_is_not_found() {
        let repo = InMemoryRepository::new();
        let power = NewPower::new("never inserted into the store").with_id(5);

        let result = repo.update_power(&power).await;

        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_reset_restarts_ids() {
        let repo = InMemoryRepository::new();
        repo.insert_power(&NewPower::new("x")).await.unwrap();

        repo.reset().await.unwrap();
        let power = repo.insert_power(&NewPower::new("y")).await.unwrap();

        assert_eq!(power.id, 1);
        assert_eq!(repo.list_powers().await.unwrap().len(), 1);
    }
}
