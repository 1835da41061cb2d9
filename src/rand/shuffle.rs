//! Fisher-Yates shuffling over a secure source.

use zeroize::Zeroize;

use super::SecureRandom;
use crate::error::Result;

const PASSES: usize = 3;

/// Shuffle `items` in place with three consecutive Fisher-Yates passes.
///
/// Slices of length 0 or 1 are left untouched and consume no randomness.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R) -> Result<()>
where
    R: SecureRandom + ?Sized,
{
    if items.len() < 2 {
        return Ok(());
    }

    for _ in 0..PASSES {
        for i in (1..items.len()).rev() {
            let j = rng.uniform_int(0, i)?;
            items.swap(i, j);
        }
    }
    Ok(())
}

/// Shuffle the characters of `s`, returning a new string.
pub fn shuffle_str<R>(s: &str, rng: &mut R) -> Result<String>
where
    R: SecureRandom + ?Sized,
{
    let mut chars: Vec<char> = s.chars().collect();
    if chars.len() < 2 {
        return Ok(s.to_owned());
    }

    let shuffled = shuffle(&mut chars, rng).map(|()| chars.iter().collect());
    chars.zeroize();
    shuffled
}
