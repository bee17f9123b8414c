//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `superheroes_core::storage`. The server runs on SQLite; the in-memory
//! backend backs the router tests.

#[cfg(test)]
pub mod inmemory;
pub mod sqlite;

#[cfg(test)]
pub use inmemory::InMemoryRepository;
pub use sqlite::SqliteRepository;
