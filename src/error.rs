//! Error types.

use thiserror::Error;

use crate::settings::CharacterKind;

/// Errors returned by the password engine.
///
/// Bad overrides never end up here; they fall back to defaults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    /// The blocking task was dropped by a shutting-down runtime.
    #[cfg(feature = "async")]
    #[error("generation task cancelled")]
    Cancelled,
}

/// A configuration rejected before any randomness is drawn.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("{0} pool is empty")]
    EmptyPool(CharacterKind),

    #[error("{field} = {value} is out of bounds")]
    OutOfBounds { field: &'static str, value: usize },

    #[error("classes require {required} characters but password length is {length}")]
    OccurrencesExceedLength { required: usize, length: usize },

    #[error("invalid random range [{min}, {max}]")]
    InvalidRange { min: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, PasswordError>;
