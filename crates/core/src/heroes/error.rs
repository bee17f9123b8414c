use thiserror::Error;

use super::validation::MIN_DESCRIPTION_LENGTH;

/// Errors raised when a request fails shape validation.
///
/// The HTTP layer collapses every variant into the same generic body, the
/// variants exist for logging and tests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "Power description too short ({len} characters, minimum {min})",
        min = MIN_DESCRIPTION_LENGTH
    )]
    DescriptionTooShort { len: usize },
    #[error("Invalid strength: {0:?}")]
    InvalidStrength(Option<String>),
}
