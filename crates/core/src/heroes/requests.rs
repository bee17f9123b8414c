//! API request payloads.
//!
//! Every field is optional so that a partially filled body still
//! deserializes; the rules for missing fields live in the methods below.
//! Unknown fields are ignored.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::types::{Power, Strength};
use super::validation::{parse_strength, validate_description};

/// Request payload for updating a power (PATCH /powers/{id}).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePowerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdatePowerRequest {
    /// Set the new description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validate and apply the update to an existing power.
    ///
    /// An absent description leaves the power untouched. On error the power
    /// is not modified.
    pub fn apply_to(self, power: &mut Power) -> Result<(), ValidationError> {
        if let Some(description) = self.description {
            validate_description(&description)?;
            power.description = description;
        }
        Ok(())
    }
}

/// Request payload for creating a hero power (POST /hero_powers).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateHeroPowerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_id: Option<i64>,
}

impl CreateHeroPowerRequest {
    pub fn new(strength: impl Into<String>, hero_id: i64, power_id: i64) -> Self {
        Self {
            strength: Some(strength.into()),
            hero_id: Some(hero_id),
            power_id: Some(power_id),
        }
    }

    /// Validates the strength field only.
    ///
    /// Hero and power existence can only be checked against storage, so this
    /// runs first and lets an invalid strength short-circuit before any lookup.
    pub fn validate(&self) -> Result<Strength, ValidationError> {
        parse_strength(self.strength.as_deref())
    }
}
