//! Application state shared by every request handler.

use std::sync::Arc;

use superheroes_core::storage::{HeroPowerRepository, HeroRepository, PowerRepository};

/// Shared application state.
///
/// Cloned for each request. Holds the repositories as trait objects; with the
/// SQLite backend all three point at the same connection.
#[derive(Clone)]
pub struct AppState {
    pub heroes: Arc<dyn HeroRepository>,
    pub powers: Arc<dyn PowerRepository>,
    pub hero_powers: Arc<dyn HeroPowerRepository>,
}

impl AppState {
    /// Creates state where one backend serves every repository trait.
    pub fn new<R>(repository: Arc<R>) -> Self
    where
        R: HeroRepository + PowerRepository + HeroPowerRepository + 'static,
    {
        Self {
            heroes: repository.clone(),
            powers: repository.clone(),
            hero_powers: repository,
        }
    }
}
