//! Password generation.

use log::{debug, trace};
use zeroize::Zeroizing;

use super::charset;
use crate::error::Result;
use crate::rand::{SecureRandom, shuffle_str};
use crate::settings::GenerationConfig;

/// Generate `config.quantity` passwords, in order.
pub fn build_password_list<R>(config: &GenerationConfig, rng: &mut R) -> Result<Vec<String>>
where
    R: SecureRandom + ?Sized,
{
    config.validate()?;

    let mut passwords = Vec::with_capacity(config.quantity);
    for _ in 0..config.quantity {
        passwords.push(build_password(config, rng)?);
    }
    debug!("generated {} password(s)", passwords.len());
    Ok(passwords)
}

/// Generate a single password satisfying every class minimum.
///
/// Candidates are drawn from a pool built once for this password and
/// rejected until they pass [`is_valid`]. The accepted candidate is shuffled
/// once more before being returned.
pub fn build_password<R>(config: &GenerationConfig, rng: &mut R) -> Result<String>
where
    R: SecureRandom + ?Sized,
{
    config.validate()?;

    let pool = Zeroizing::new(charset::build(config, rng)?);
    let mut attempts = 0usize;

    loop {
        attempts += 1;
        let candidate = draw(&pool, config.password_length, rng)?;
        if is_valid(config, &candidate) {
            debug!(
                "password accepted after {attempts} attempt(s) from a pool of {}",
                pool.len()
            );
            return shuffle_str(&candidate, rng);
        }
        trace!("attempt {attempts} rejected");
    }
}

/// Whether `password` contains enough characters of every class.
///
/// Each class is checked against the whole password independently, so a
/// character found in two class pools counts towards both.
pub fn is_valid(config: &GenerationConfig, password: &str) -> bool {
    config
        .classes()
        .all(|(_, class)| class.is_satisfied_by(password))
}

/// `length` characters drawn uniformly, with replacement, from `pool`.
fn draw<R>(pool: &[char], length: usize, rng: &mut R) -> Result<Zeroizing<String>>
where
    R: SecureRandom + ?Sized,
{
    let mut out = Zeroizing::new(String::with_capacity(length));
    for _ in 0..length {
        let idx = rng.uniform_int(0, pool.len() - 1)?;
        out.push(pool[idx]);
    }
    Ok(out)
}
