//! Password generation settings.

mod overrides;

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::ConfigurationError;

pub use overrides::{Expected, Overrides, conforms};

/// Accepted ranges for overridable fields.
pub mod limits {
    use std::ops::RangeInclusive;

    pub const PASSWORD_LENGTH: RangeInclusive<usize> = 8..=128;
    pub const QUANTITY: RangeInclusive<usize> = 1..=100;
    pub const POOL_LENGTH: RangeInclusive<usize> = 4..=128;
    pub const MIN_OCCURRENCES: RangeInclusive<usize> = 1..=2;
}

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "£$%&+*/-@#";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterKind {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterKind {
    /// Pool concatenation order.
    pub const ALL: [CharacterKind; 4] = [
        CharacterKind::Uppercase,
        CharacterKind::Lowercase,
        CharacterKind::Digit,
        CharacterKind::Symbol,
    ];

    pub fn key_prefix(self) -> &'static str {
        match self {
            CharacterKind::Uppercase => "uppercase",
            CharacterKind::Lowercase => "lowercase",
            CharacterKind::Digit => "digit",
            CharacterKind::Symbol => "symbol",
        }
    }

    pub fn pool_key(self) -> &'static str {
        match self {
            CharacterKind::Uppercase => "uppercase_pool",
            CharacterKind::Lowercase => "lowercase_pool",
            CharacterKind::Digit => "digit_pool",
            CharacterKind::Symbol => "symbol_pool",
        }
    }

    pub fn min_occurrences_key(self) -> &'static str {
        match self {
            CharacterKind::Uppercase => "uppercase_min_occurrences",
            CharacterKind::Lowercase => "lowercase_min_occurrences",
            CharacterKind::Digit => "digit_min_occurrences",
            CharacterKind::Symbol => "symbol_min_occurrences",
        }
    }
}

impl fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_prefix())
    }
}

/// One character class: which characters belong to it and how many a
/// password must contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterClass {
    pub pool: String,
    pub min_occurrences: usize,
}

impl CharacterClass {
    pub fn new(pool: impl Into<String>, min_occurrences: usize) -> Self {
        Self {
            pool: pool.into(),
            min_occurrences,
        }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.pool.contains(c)
    }

    /// Scan `password` left to right, stopping once `min_occurrences`
    /// members of this class have been seen.
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        let mut seen = 0;
        for c in password.chars() {
            if self.contains(c) {
                seen += 1;
            }
            if seen >= self.min_occurrences {
                return true;
            }
        }
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub password_length: usize,
    pub quantity: usize,
    pub uppercase: CharacterClass,
    pub lowercase: CharacterClass,
    pub digit: CharacterClass,
    pub symbol: CharacterClass,
}

impl GenerationConfig {
    /// Defaults with `overrides` applied on top.
    pub fn from_overrides(overrides: Option<&Overrides>) -> Self {
        let config = Self::default();
        match overrides {
            Some(o) => config.apply_overrides(o),
            None => config,
        }
    }

    pub fn class(&self, kind: CharacterKind) -> &CharacterClass {
        match kind {
            CharacterKind::Uppercase => &self.uppercase,
            CharacterKind::Lowercase => &self.lowercase,
            CharacterKind::Digit => &self.digit,
            CharacterKind::Symbol => &self.symbol,
        }
    }

    pub fn class_mut(&mut self, kind: CharacterKind) -> &mut CharacterClass {
        match kind {
            CharacterKind::Uppercase => &mut self.uppercase,
            CharacterKind::Lowercase => &mut self.lowercase,
            CharacterKind::Digit => &mut self.digit,
            CharacterKind::Symbol => &mut self.symbol,
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = (CharacterKind, &CharacterClass)> {
        CharacterKind::ALL.into_iter().map(|k| (k, self.class(k)))
    }

    /// Reject configurations outside the accepted ranges or for which the
    /// retry loop could never finish.
    ///
    /// Typed configs get the same ranges as overrides; pool lengths are
    /// counted in characters.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_bounds("password_length", self.password_length, &limits::PASSWORD_LENGTH)?;
        check_bounds("quantity", self.quantity, &limits::QUANTITY)?;

        for (kind, class) in self.classes() {
            if class.pool.is_empty() {
                return Err(ConfigurationError::EmptyPool(kind));
            }
            check_bounds(kind.pool_key(), class.pool.chars().count(), &limits::POOL_LENGTH)?;
            check_bounds(
                kind.min_occurrences_key(),
                class.min_occurrences,
                &limits::MIN_OCCURRENCES,
            )?;
        }

        let required = self.required_characters();
        if required > self.password_length {
            return Err(ConfigurationError::OccurrencesExceedLength {
                required,
                length: self.password_length,
            });
        }

        Ok(())
    }

    /// Combined minimum across all classes.
    pub fn required_characters(&self) -> usize {
        self.classes().map(|(_, c)| c.min_occurrences).sum()
    }
}

fn check_bounds(
    field: &'static str,
    value: usize,
    range: &RangeInclusive<usize>,
) -> Result<(), ConfigurationError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigurationError::OutOfBounds { field, value })
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            password_length: 12,
            quantity: 10,
            uppercase: CharacterClass::new(UPPERCASE, 1),
            lowercase: CharacterClass::new(LOWERCASE, 1),
            digit: CharacterClass::new(DIGITS, 1),
            symbol: CharacterClass::new(SYMBOLS, 1),
        }
    }
}
