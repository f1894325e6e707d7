//! Password generation.

use crate::policy::PasswordPolicy;
use crate::rng;

use super::GenerateError;
use super::charset;

/// Generate a single password satisfying the policy.
///
/// Seeds one character from each enabled category so every category is
/// represented, fills the remainder from the full pool, then applies an
/// unbiased shuffle so the seeded characters are not pinned to the
/// front. All draws come from the OS CSPRNG.
///
/// Lengths below the enabled-category count are rejected: seeding would
/// overshoot the requested length, and truncating could silently drop a
/// guaranteed category.
pub fn generate(policy: &PasswordPolicy) -> Result<String, GenerateError> {
    if policy.length == 0 {
        return Err(GenerateError::InvalidLength);
    }

    let pool = charset::build(policy)?;

    if policy.length < policy.enabled_count() {
        return Err(GenerateError::InvalidLength);
    }

    let mut bytes = Vec::with_capacity(policy.length);

    for set in charset::enabled_alphabets(policy) {
        bytes.push(rng::choose(set));
    }

    while bytes.len() < policy.length {
        bytes.push(rng::choose(&pool));
    }

    rng::shuffle(&mut bytes);

    // Safety: the pool is all ASCII
    Ok(unsafe { String::from_utf8_unchecked(bytes) })
}
