//! Random number generation backed by the operating system CSPRNG.

mod shuffle;

use ::rand::TryRngCore;
use ::rand::rngs::OsRng;

use crate::error::{ConfigurationError, PasswordError, Result};

pub use shuffle::{shuffle, shuffle_str};

// =============================================================================
// Source
// =============================================================================

/// A cryptographically secure source of random words.
///
/// Implementors only supply raw 64-bit draws; bounded draws are derived from
/// them by [`SecureRandom::uniform_int`].
pub trait SecureRandom {
    fn try_next_u64(&mut self) -> Result<u64>;

    /// Uniform integer in `[min, max]`, both ends inclusive.
    ///
    /// Uses rejection sampling so that ranges which are not a power of two
    /// carry no modulo bias.
    fn uniform_int(&mut self, min: usize, max: usize) -> Result<usize> {
        if min > max {
            return Err(ConfigurationError::InvalidRange { min, max }.into());
        }

        let span = (max - min) as u64;
        let Some(range) = span.checked_add(1) else {
            // Full 64-bit range, every draw is already uniform
            return Ok(min.wrapping_add(self.try_next_u64()? as usize));
        };

        // 2^64 mod range: draws below this would bias the low residues
        let threshold = range.wrapping_neg() % range;
        loop {
            let draw = self.try_next_u64()?;
            if draw >= threshold {
                return Ok(min + (draw % range) as usize);
            }
        }
    }
}

impl<R: SecureRandom + ?Sized> SecureRandom for &mut R {
    #[inline]
    fn try_next_u64(&mut self) -> Result<u64> {
        (**self).try_next_u64()
    }
}

/// The host platform's CSPRNG (`getrandom`, `BCryptGenRandom`, ...).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl OsEntropy {
    pub fn new() -> Self {
        OsEntropy
    }
}

impl SecureRandom for OsEntropy {
    #[inline]
    fn try_next_u64(&mut self) -> Result<u64> {
        OsRng
            .try_next_u64()
            .map_err(|e| PasswordError::EntropyUnavailable(e.to_string()))
    }
}

// =============================================================================
// Test sources
// =============================================================================
