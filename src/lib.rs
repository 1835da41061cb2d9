//! Password generation with per-class composition rules.
//!
//! Every password is drawn from a shuffled pool of uppercase, lowercase,
//! digit and symbol characters and rejected until each class appears at
//! least its configured number of times. All randomness comes from the
//! operating system CSPRNG.
//!
//! ```no_run
//! use randpass_core::Overrides;
//!
//! let overrides = Overrides::new()
//!     .set("password_length", 16)
//!     .set("quantity", 5);
//! for pass in randpass_core::generate(Some(&overrides))? {
//!     println!("{pass}");
//! }
//! # Ok::<(), randpass_core::PasswordError>(())
//! ```
//!
//! Overrides that have the wrong type or fall outside their range are
//! ignored and the default is used instead. Configurations that could never
//! be satisfied are rejected with [`ConfigurationError`].

pub mod error;
pub mod pass;
pub mod rand;
pub mod settings;

#[cfg(feature = "async")]
mod nonblocking;

pub use crate::rand::{OsEntropy, SecureRandom};
pub use error::{ConfigurationError, PasswordError, Result};
pub use settings::{CharacterClass, CharacterKind, GenerationConfig, Overrides};

#[cfg(feature = "async")]
pub use nonblocking::{generate_async, password_async};

/// Generate `quantity` passwords (10 unless overridden).
pub fn generate(overrides: Option<&Overrides>) -> Result<Vec<String>> {
    let config = GenerationConfig::from_overrides(overrides);
    generate_with(&config, &mut OsEntropy::new())
}

/// Generate one password. `quantity` is ignored.
pub fn password(overrides: Option<&Overrides>) -> Result<String> {
    let config = GenerationConfig::from_overrides(overrides);
    password_with(&config, &mut OsEntropy::new())
}

pub fn generate_with<R>(config: &GenerationConfig, rng: &mut R) -> Result<Vec<String>>
where
    R: SecureRandom + ?Sized,
{
    pass::build_password_list(config, rng)
}

pub fn password_with<R>(config: &GenerationConfig, rng: &mut R) -> Result<String>
where
    R: SecureRandom + ?Sized,
{
    pass::build_password(config, rng)
}
