//! Character pool building for password generation.

use crate::error::Result;
use crate::rand::{SecureRandom, shuffle};
use crate::settings::GenerationConfig;

/// Build the shuffled pool every password character is drawn from.
///
/// Each class pool is shuffled on its own, the four are concatenated
/// (uppercase, lowercase, digit, symbol) and the result shuffled again.
/// Duplicate characters inside a class are kept.
pub fn build<R>(config: &GenerationConfig, rng: &mut R) -> Result<Vec<char>>
where
    R: SecureRandom + ?Sized,
{
    let mut chars: Vec<char> = Vec::with_capacity(size(config));

    for (_, class) in config.classes() {
        let start = chars.len();
        chars.extend(class.pool.chars());
        shuffle(&mut chars[start..], rng)?;
    }

    shuffle(&mut chars, rng)?;
    Ok(chars)
}

/// Number of characters in the merged pool.
pub fn size(config: &GenerationConfig) -> usize {
    config.classes().map(|(_, c)| c.pool.chars().count()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::OsEntropy;
    use crate::rand::testing::Scripted;
    use crate::settings::CharacterClass;

    fn sorted(mut v: Vec<char>) -> Vec<char> {
        v.sort_unstable();
        v
    }

    #[test]
    fn pool_is_union_of_classes() {
        let config = GenerationConfig::default();
        let pool = build(&config, &mut OsEntropy::new()).unwrap();

        let expected: Vec<char> = config
            .classes()
            .flat_map(|(_, c)| c.pool.chars().collect::<Vec<_>>())
            .collect();
        assert_eq!(pool.len(), 26 + 26 + 10 + 10);
        assert_eq!(sorted(pool), sorted(expected));
    }

    #[test]
    fn duplicates_are_preserved() {
        let config = GenerationConfig {
            uppercase: CharacterClass::new("AAAB", 1),
            digit: CharacterClass::new("1111", 1),
            ..GenerationConfig::default()
        };
        let pool = build(&config, &mut OsEntropy::new()).unwrap();
        assert_eq!(pool.iter().filter(|&&c| c == 'A').count(), 3);
        assert_eq!(pool.iter().filter(|&&c| c == '1').count(), 4);
        assert_eq!(pool.len(), size(&config));
    }

    #[test]
    fn concatenates_in_class_order() {
        // 839 = lcm(2..=8) - 1, so every draw picks j = i and each swap is
        // a no-op; the concatenation order shows through.
        let config = GenerationConfig {
            uppercase: CharacterClass::new("AB", 1),
            lowercase: CharacterClass::new("cd", 1),
            digit: CharacterClass::new("12", 1),
            symbol: CharacterClass::new("#%", 1),
            ..GenerationConfig::default()
        };
        let mut rng = Scripted::new(&[839]);
        let pool = build(&config, &mut rng).unwrap();
        assert_eq!(pool.iter().collect::<String>(), "ABcd12#%");
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(size(&GenerationConfig::default()), 72);
    }
}
