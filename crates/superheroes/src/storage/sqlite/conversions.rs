//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use rusqlite::Row;

use superheroes_core::heroes::{Hero, HeroPower, Power, Strength};

/// Convert a SQLite row to a Hero.
///
/// Expected columns: id, name, super_name
pub fn row_to_hero(row: &Row) -> rusqlite::Result<Hero> {
    hero_at(row, 0)
}

/// Convert a SQLite row to a Power.
///
/// Expected columns: id, description
pub fn row_to_power(row: &Row) -> rusqlite::Result<Power> {
    power_at(row, 0)
}

/// Convert a joined row to a HeroPower paired with its Power.
///
/// Expected columns: hp.id, hp.hero_id, hp.power_id, hp.strength, p.id, p.description
pub fn row_to_hero_power_with_power(row: &Row) -> rusqlite::Result<(HeroPower, Power)> {
    Ok((hero_power_at(row, 0)?, power_at(row, 4)?))
}

/// Convert a joined row to a HeroPower paired with its Hero.
///
/// Expected columns: hp.id, hp.hero_id, hp.power_id, hp.strength, h.id, h.name, h.super_name
pub fn row_to_hero_power_with_hero(row: &Row) -> rusqlite::Result<(HeroPower, Hero)> {
    Ok((hero_power_at(row, 0)?, hero_at(row, 4)?))
}

fn hero_at(row: &Row, offset: usize) -> rusqlite::Result<Hero> {
    Ok(Hero {
        id: row.get(offset)?,
        name: row.get(offset + 1)?,
        super_name: row.get(offset + 2)?,
    })
}

fn power_at(row: &Row, offset: usize) -> rusqlite::Result<Power> {
    Ok(Power {
        id: row.get(offset)?,
        description: row.get(offset + 1)?,
    })
}

fn hero_power_at(row: &Row, offset: usize) -> rusqlite::Result<HeroPower> {
    let strength: String = row.get(offset + 3)?;
    Ok(HeroPower {
        id: row.get(offset)?,
        hero_id: row.get(offset + 1)?,
        power_id: row.get(offset + 2)?,
        strength: parse_strength(offset + 3, &strength)?,
    })
}

/// Parse a stored strength literal.
fn parse_strength(column: usize, s: &str) -> rusqlite::Result<Strength> {
    s.parse().map_err(|message: String| {
        rusqlite::Error::FromSqlConversionFailure(
            column,
            rusqlite::types::Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                message,
            )),
        )
    })
}
