//! Caller-supplied overrides.
//!
//! Overrides are loosely typed JSON values. Anything that does not have the
//! expected type or falls outside its range is dropped and the default stays
//! in effect; nothing here returns an error.

use std::ops::RangeInclusive;

use log::{debug, warn};
use serde_json::{Map, Value};

use super::{CharacterKind, GenerationConfig, limits};

const PASSWORD_LENGTH: &str = "password_length";
const QUANTITY: &str = "quantity";

/// The JSON type an override must have to be considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Integer,
    String,
}

/// Field name to value mapping, e.g. `{"password_length": 16}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides(Map<String, Value>);

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn integer(&self, key: &str, range: RangeInclusive<usize>) -> Option<usize> {
        let value = self.accepted(key, Expected::Integer, &range)?;
        as_whole_number(value)
    }

    fn string(&self, key: &str, range: RangeInclusive<usize>) -> Option<&str> {
        self.accepted(key, Expected::String, &range)?.as_str()
    }

    fn accepted(
        &self,
        key: &str,
        expected: Expected,
        range: &RangeInclusive<usize>,
    ) -> Option<&Value> {
        let value = self.0.get(key)?;
        if conforms(value, expected, range) {
            debug!("override {key} accepted");
            Some(value)
        } else {
            warn!("override {key} ignored: expected {expected:?} in {range:?}");
            None
        }
    }

    fn is_recognized(key: &str) -> bool {
        key == PASSWORD_LENGTH
            || key == QUANTITY
            || CharacterKind::ALL
                .iter()
                .any(|k| key == k.pool_key() || key == k.min_occurrences_key())
    }
}

impl From<Map<String, Value>> for Overrides {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Non-object values carry no fields and yield empty overrides.
impl From<Value> for Overrides {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

/// Whether `value` has type `expected` and lies within `range`.
///
/// Integers must be whole numbers (`12.0` passes, `12.5` does not) whose
/// value is in range; strings must have a character count in range.
pub fn conforms(value: &Value, expected: Expected, range: &RangeInclusive<usize>) -> bool {
    match (expected, value) {
        (Expected::Integer, Value::Number(_)) => {
            as_whole_number(value).is_some_and(|n| range.contains(&n))
        }
        (Expected::String, Value::String(s)) => range.contains(&s.chars().count()),
        _ => false,
    }
}

fn as_whole_number(value: &Value) -> Option<usize> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(u) = n.as_u64() {
        return usize::try_from(u).ok();
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f >= 0.0 && f <= usize::MAX as f64 {
        Some(f as usize)
    } else {
        None
    }
}

impl GenerationConfig {
    /// Apply every conforming override on top of `self`.
    pub fn apply_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(n) = overrides.integer(PASSWORD_LENGTH, limits::PASSWORD_LENGTH) {
            self.password_length = n;
        }
        if let Some(n) = overrides.integer(QUANTITY, limits::QUANTITY) {
            self.quantity = n;
        }

        for kind in CharacterKind::ALL {
            let pool = overrides.string(kind.pool_key(), limits::POOL_LENGTH);
            let min = overrides.integer(kind.min_occurrences_key(), limits::MIN_OCCURRENCES);

            let class = self.class_mut(kind);
            if let Some(pool) = pool {
                class.pool = pool.to_owned();
            }
            if let Some(min) = min {
                class.min_occurrences = min;
            }
        }

        for key in overrides.0.keys().filter(|k| !Overrides::is_recognized(k)) {
            debug!("override {key} not recognized");
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn apply(v: Value) -> GenerationConfig {
        GenerationConfig::default().apply_overrides(&Overrides::from(v))
    }

    #[test]
    fn valid_overrides_apply() {
        let config = apply(json!({
            "password_length": 16,
            "quantity": 5,
            "uppercase_pool": "ABC D",
            "uppercase_min_occurrences": 2,
            "symbol_pool": "!?#%",
        }));
        assert_eq!(config.password_length, 16);
        assert_eq!(config.quantity, 5);
        assert_eq!(config.uppercase.pool, "ABC D");
        assert_eq!(config.uppercase.min_occurrences, 2);
        assert_eq!(config.symbol.pool, "!?#%");
        assert_eq!(config.lowercase, GenerationConfig::default().lowercase);
    }

    #[test]
    fn out_of_range_keeps_default() {
        let config = apply(json!({
            "password_length": 3,
            "quantity": 101,
            "digit_min_occurrences": 3,
            "lowercase_pool": "abc",
        }));
        assert_eq!(config, GenerationConfig::default());
    }

    #[test]
    fn wrong_type_keeps_default() {
        let config = apply(json!({
            "quantity": "ten",
            "password_length": true,
            "digit_pool": 1234,
            "symbol_min_occurrences": null,
        }));
        assert_eq!(config, GenerationConfig::default());
    }

    #[test]
    fn fractional_numbers_are_not_integers() {
        assert_eq!(apply(json!({ "password_length": 12.5 })).password_length, 12);
        assert_eq!(apply(json!({ "password_length": 20.0 })).password_length, 20);
        assert_eq!(apply(json!({ "password_length": -16 })).password_length, 12);
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let config = apply(json!({ "pwLength": 40, "uppercase_poolx": "WXYZ" }));
        assert_eq!(config, GenerationConfig::default());
    }

    #[test]
    fn non_object_is_empty() {
        assert!(Overrides::from(json!([1, 2, 3])).is_empty());
        assert!(Overrides::from(json!("password_length")).is_empty());
    }

    #[test]
    fn pool_length_counts_chars() {
        // 4 chars, 8 bytes
        let config = apply(json!({ "symbol_pool": "££££" }));
        assert_eq!(config.symbol.pool, "££££");
    }

    #[test]
    fn conforms_bounds_are_inclusive() {
        let r = 8..=128;
        assert!(conforms(&json!(8), Expected::Integer, &r));
        assert!(conforms(&json!(128), Expected::Integer, &r));
        assert!(!conforms(&json!(129), Expected::Integer, &r));
        assert!(!conforms(&json!("12345678"), Expected::Integer, &r));
        assert!(conforms(&json!("12345678"), Expected::String, &r));
    }

    #[test]
    fn builder_matches_json() {
        let built = Overrides::new()
            .set("password_length", 16)
            .set("digit_pool", "2468");
        assert_eq!(
            built,
            Overrides::from(json!({ "password_length": 16, "digit_pool": "2468" }))
        );
        assert_eq!(built.get("password_length"), Some(&json!(16)));
    }

    #[test]
    fn recognized_keys() {
        assert!(Overrides::is_recognized("password_length"));
        assert!(Overrides::is_recognized("symbol_min_occurrences"));
        assert!(Overrides::is_recognized("digit_pool"));
        assert!(!Overrides::is_recognized("digits"));
    }
}
