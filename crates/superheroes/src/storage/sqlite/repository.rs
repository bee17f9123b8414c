//! SQLite repository implementation.
//!
//! Implements the repository traits from `superheroes_core::storage` using SQLite.

use std::path::Path;

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use superheroes_core::heroes::{Hero, HeroPower, NewHero, NewHeroPower, NewPower, Power};
use superheroes_core::storage::{
    HeroPowerRepository, HeroRepository, PowerRepository, RepositoryError, Result,
    SeedRepository,
};

use super::conversions::{
    row_to_hero, row_to_hero_power_with_hero, row_to_hero_power_with_power, row_to_power,
};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::{migrations, schema};

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// A single connection serves every request; `tokio_rusqlite` runs each call
/// on its own thread. Writes go through an explicit transaction that is
/// committed before the call returns.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens a file-based database, creating it if it doesn't exist.
    ///
    /// Pending migrations are applied before the repository is returned.
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init(conn).await
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init(conn).await
    }

    /// Enables foreign keys and brings the schema up to date.
    async fn init(conn: Connection) -> Result<Self> {
        let applied = conn
            .call(|conn| {
                conn.execute_batch(schema::ENABLE_FOREIGN_KEYS)
                    .map_err(wrap_err)?;
                Ok(migrations::apply_migrations(conn))
            })
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))??;

        tracing::debug!(applied, "Database schema is up to date");

        Ok(Self { conn })
    }
}

// ============================================================================
// HeroRepository implementation
// ============================================================================

#[async_trait]
impl HeroRepository for SqliteRepository {
    async fn list_heroes(&self) -> Result<Vec<Hero>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_HEROES).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_hero).map_err(wrap_err)?;

                let mut heroes = Vec::new();
                for row_result in rows {
                    heroes.push(row_result.map_err(wrap_err)?);
                }
                Ok(heroes)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Hero"))
    }

    async fn get_hero(&self, id: i64) -> Result<Option<Hero>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_HERO_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_hero) {
                    Ok(hero) => Ok(Some(hero)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Hero", id.to_string()))
    }
}

// ============================================================================
// PowerRepository implementation
// ============================================================================

#[async_trait]
impl PowerRepository for SqliteRepository {
    async fn list_powers(&self) -> Result<Vec<Power>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_POWERS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_power).map_err(wrap_err)?;

                let mut powers = Vec::new();
                for row_result in rows {
                    powers.push(row_result.map_err(wrap_err)?);
                }
                Ok(powers)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Power"))
    }

    async fn get_power(&self, id: i64) -> Result<Option<Power>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_POWER_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_power) {
                    Ok(power) => Ok(Some(power)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Power", id.to_string()))
    }

    async fn update_power(&self, power: &Power) -> Result<()> {
        let id = power.id;
        let description = power.description.clone();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                let rows = tx
                    .execute(schema::UPDATE_POWER, rusqlite::params![id, description])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    return Err(wrap_err(rusqlite::Error::QueryReturnedNoRows));
                }
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Power", id.to_string()))
    }
}

// ============================================================================
// HeroPowerRepository implementation
// ============================================================================

#[async_trait]
impl HeroPowerRepository for SqliteRepository {
    async fn create_hero_power(&self, hero_power: &NewHeroPower) -> Result<HeroPower> {
        let new = *hero_power;

        let id = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tx.execute(
                    schema::INSERT_HERO_POWER,
                    rusqlite::params![new.hero_id, new.power_id, new.strength.as_str()],
                )
                .map_err(wrap_err)?;
                let id = tx.last_insert_rowid();
                tx.commit().map_err(wrap_err)?;
                Ok(id)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "HeroPower"))?;

        Ok(new.with_id(id))
    }

    async fn hero_powers_for_hero(&self, hero_id: i64) -> Result<Vec<(HeroPower, Power)>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_HERO_POWERS_WITH_POWER_BY_HERO)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([hero_id], row_to_hero_power_with_power)
                    .map_err(wrap_err)?;

                let mut results = Vec::new();
                for row_result in rows {
                    results.push(row_result.map_err(wrap_err)?);
                }
                Ok(results)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "HeroPower"))
    }

    async fn hero_powers_for_power(&self, power_id: i64) -> Result<Vec<(HeroPower, Hero)>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_HERO_POWERS_WITH_HERO_BY_POWER)
                    .map_err(wrap_err)?;
                let rows = stmt
                    .query_map([power_id], row_to_hero_power_with_hero)
                    .map_err(wrap_err)?;

                let mut results = Vec::new();
                for row_result in rows {
                    results.push(row_result.map_err(wrap_err)?);
                }
                Ok(results)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "HeroPower"))
    }
}

// ============================================================================
// SeedRepository implementation
// ============================================================================

#[async_trait]
impl SeedRepository for SqliteRepository {
    async fn reset(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tx.execute_batch(schema::DELETE_ALL).map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Hero"))
    }

    async fn insert_hero(&self, hero: &NewHero) -> Result<Hero> {
        let new = hero.clone();
        let (name, super_name) = (hero.name.clone(), hero.super_name.clone());

        let id = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tx.execute(schema::INSERT_HERO, rusqlite::params![name, super_name])
                    .map_err(wrap_err)?;
                let id = tx.last_insert_rowid();
                tx.commit().map_err(wrap_err)?;
                Ok(id)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Hero"))?;

        Ok(new.with_id(id))
    }

    async fn insert_power(&self, power: &NewPower) -> Result<Power> {
        let new = power.clone();
        let description = power.description.clone();

        let id = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tx.execute(schema::INSERT_POWER, [description])
                    .map_err(wrap_err)?;
                let id = tx.last_insert_rowid();
                tx.commit().map_err(wrap_err)?;
                Ok(id)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Power"))?;

        Ok(new.with_id(id))
    }
}

#[cfg(test)]
mod tests {
    use superheroes_core::heroes::Strength;

    use super::*;

    async fn seeded() -> SqliteRepository {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        repo.insert_hero(&NewHero::new("Kamala Khan", "Ms. Marvel"))
            .await
            .unwrap();
        repo.insert_hero(&NewHero::new("Ororo Munroe", "Storm"))
            .await
            .unwrap();
        repo.insert_power(&NewPower::new("gives the wielder super-human strengths"))
            .await
            .unwrap();
        repo.insert_power(&NewPower::new("can stretch the human body to extreme lengths"))
            .await
            .unwrap();
        repo
    }

    #[tokio::test]
    async fn test_list_heroes_in_id_order() {
        let repo = seeded().await;

        let heroes = repo.list_heroes().await.unwrap();

        assert_eq!(heroes.len(), 2);
        assert_eq!(heroes[0].id, 1);
        assert_eq!(heroes[1].super_name, "Storm");
    }

    #[tokio::test]
    async fn test_get_missing_hero_is_none() {
        let repo = seeded().await;

        assert!(repo.get_hero(99).await.unwrap().is_none());
        assert!(repo.get_power(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_power_persists() {
        let repo = seeded().await;
        let mut power = repo.get_power(1).await.unwrap().unwrap();
        power.description = "lets the wielder lift small planets".to_string();

        repo.update_power(&power).await.unwrap();

        let stored = repo.get_power(1).await.unwrap().unwrap();
        assert_eq!(stored.description, "lets the wielder lift small planets");
    }

    #[tokio::test]
    async fn test_update_missing_power_is_not_found() {
        let repo = seeded().await;
        let power = Power {
            id: 42,
            description: "this power does not exist anywhere".to_string(),
        };

        let result = repo.update_power(&power).await;

        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_create_hero_power_assigns_id_and_links_both_sides() {
        let repo = seeded().await;

        let hero_power = repo
            .create_hero_power(&NewHeroPower {
                hero_id: 1,
                power_id: 2,
                strength: Strength::Average,
            })
            .await
            .unwrap();

        assert_eq!(hero_power.id, 1);

        let for_hero = repo.hero_powers_for_hero(1).await.unwrap();
        assert_eq!(for_hero.len(), 1);
        assert_eq!(for_hero[0].1.id, 2);

        let for_power = repo.hero_powers_for_power(2).await.unwrap();
        assert_eq!(for_power.len(), 1);
        assert_eq!(for_power[0].1.name, "Kamala Khan");
    }

    #[tokio::test]
    async fn test_create_hero_power_with_missing_hero_violates_foreign_key() {
        let repo = seeded().await;

        let result = repo
            .create_hero_power(&NewHeroPower {
                hero_id: 99,
                power_id: 1,
                strength: Strength::Weak,
            })
            .await;

        assert!(matches!(result, Err(RepositoryError::InvalidData(_))));
        assert!(repo.hero_powers_for_power(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reset_clears_everything_and_restarts_ids() {
        let repo = seeded().await;
        repo.create_hero_power(&NewHeroPower {
            hero_id: 1,
            power_id: 1,
            strength: Strength::Strong,
        })
        .await
        .unwrap();

        repo.reset().await.unwrap();

        assert!(repo.list_heroes().await.unwrap().is_empty());
        assert!(repo.list_powers().await.unwrap().is_empty());
        let hero = repo.insert_hero(&NewHero::new("Jean Grey", "Dark Phoenix")).await.unwrap();
        assert_eq!(hero.id, 1);
    }
}
