//! Pure validation rules for mutable fields.

use super::error::ValidationError;
use super::types::Strength;

/// Minimum number of characters a power description must have.
pub const MIN_DESCRIPTION_LENGTH: usize = 20;

/// Checks that a description is long enough to be stored.
///
/// Length is counted in characters, not bytes.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    let len = description.chars().count();
    if len < MIN_DESCRIPTION_LENGTH {
        return Err(ValidationError::DescriptionTooShort { len });
    }
    Ok(())
}

/// Parses a strength from request input. A missing value is invalid.
pub fn parse_strength(value: Option<&str>) -> Result<Strength, ValidationError> {
    value
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| ValidationError::InvalidStrength(value.map(str::to_string)))
}
