//! SQL statements used by the SQLite repository.
//!
//! Table definitions live in the embedded migrations; this module only holds
//! queries.

pub const ENABLE_FOREIGN_KEYS: &str = "PRAGMA foreign_keys = ON;";

// Hero queries
pub const SELECT_HEROES: &str = r#"
SELECT id, name, super_name
FROM heroes
ORDER BY id
"#;

pub const SELECT_HERO_BY_ID: &str = r#"
SELECT id, name, super_name
FROM heroes
WHERE id = ?1
"#;

pub const INSERT_HERO: &str = r#"
INSERT INTO heroes (name, super_name)
VALUES (?1, ?2)
"#;

// Power queries
pub const SELECT_POWERS: &str = r#"
SELECT id, description
FROM powers
ORDER BY id
"#;

pub const SELECT_POWER_BY_ID: &str = r#"
SELECT id, description
FROM powers
WHERE id = ?1
"#;

pub const INSERT_POWER: &str = r#"
INSERT INTO powers (description)
VALUES (?1)
"#;

pub const UPDATE_POWER: &str = r#"
UPDATE powers
SET description = ?2
WHERE id = ?1
"#;

// Hero power queries
pub const INSERT_HERO_POWER: &str = r#"
INSERT INTO hero_powers (hero_id, power_id, strength)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_HERO_POWERS_WITH_POWER_BY_HERO: &str = r#"
SELECT hp.id, hp.hero_id, hp.power_id, hp.strength, p.id, p.description
FROM hero_powers hp
INNER JOIN powers p ON p.id = hp.power_id
WHERE hp.hero_id = ?1
ORDER BY hp.id
"#;

pub const SELECT_HERO_POWERS_WITH_HERO_BY_POWER: &str = r#"
SELECT hp.id, hp.hero_id, hp.power_id, hp.strength, h.id, h.name, h.super_name
FROM hero_powers hp
INNER JOIN heroes h ON h.id = hp.hero_id
WHERE hp.power_id = ?1
ORDER BY hp.id
"#;

// Seeding
pub const DELETE_ALL: &str = r#"
DELETE FROM hero_powers;
DELETE FROM heroes;
DELETE FROM powers;
DELETE FROM sqlite_sequence WHERE name IN ('hero_powers', 'heroes', 'powers');
"#;
