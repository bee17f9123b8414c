use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A character with a real name and an alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: i64,
    pub name: String,
    pub super_name: String,
}

/// An ability described in prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Power {
    pub id: i64,
    pub description: String,
}

/// Records that a hero has a power at a given strength.
///
/// Holds plain foreign keys; the referenced hero and power are loaded
/// separately when a response needs them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroPower {
    pub id: i64,
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: Strength,
}

/// How strongly a hero wields a power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strength {
    Strong,
    Weak,
    Average,
}

impl Strength {
    /// All allowed values, in declaration order.
    pub const ALL: [Strength; 3] = [Strength::Strong, Strength::Weak, Strength::Average];

    /// Returns the literal stored in the database and sent over the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Strong => "Strong",
            Strength::Weak => "Weak",
            Strength::Average => "Average",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strength {
    type Err = String;

    /// Parses one of the exact literals. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Strong" => Ok(Strength::Strong),
            "Weak" => Ok(Strength::Weak),
            "Average" => Ok(Strength::Average),
            other => Err(format!("Unknown strength: {other}")),
        }
    }
}

/// A hero row before the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
    pub super_name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>, super_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            super_name: super_name.into(),
        }
    }

    /// Attaches a store-assigned id.
    pub fn with_id(self, id: i64) -> Hero {
        Hero {
            id,
            name: self.name,
            super_name: self.super_name,
        }
    }
}

/// A power row before the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPower {
    pub description: String,
}

impl NewPower {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Attaches a store-assigned id.
    pub fn with_id(self, id: i64) -> Power {
        Power {
            id,
            description: self.description,
        }
    }
}

/// A validated association ready to be inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewHeroPower {
    pub hero_id: i64,
    pub power_id: i64,
    pub strength: Strength,
}

impl NewHeroPower {
    /// Attaches a store-assigned id.
    pub fn with_id(self, id: i64) -> HeroPower {
        HeroPower {
            id,
            hero_id: self.hero_id,
            power_id: self.power_id,
            strength: self.strength,
        }
    }
}
