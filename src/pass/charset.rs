//! Character pool construction.
//!
//! Four disjoint ASCII alphabets in a fixed category order. The pool is
//! their concatenation restricted to the categories a policy enables.

use crate::policy::PasswordPolicy;

use super::GenerateError;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?/";

/// Build the character pool for a policy.
///
/// Enabled alphabets are concatenated in the fixed order lowercase,
/// uppercase, digits, symbols. An all-false policy is reported as
/// `NoCategorySelected`, never as an empty pool.
pub fn build(policy: &PasswordPolicy) -> Result<Vec<u8>, GenerateError> {
    let mut pool: Vec<u8> = Vec::new();

    for set in enabled_alphabets(policy) {
        pool.extend_from_slice(set);
    }

    if pool.is_empty() {
        return Err(GenerateError::NoCategorySelected);
    }

    Ok(pool)
}

/// Alphabets of the enabled categories, in the fixed category order.
pub fn enabled_alphabets(policy: &PasswordPolicy) -> Vec<&'static [u8]> {
    let flags = [
        (policy.lowercase, LOWERCASE),
        (policy.uppercase, UPPERCASE),
        (policy.digits, DIGITS),
        (policy.symbols, SYMBOLS),
    ];

    flags
        .into_iter()
        .filter_map(|(on, set)| on.then_some(set))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(lowercase: bool, uppercase: bool, digits: bool, symbols: bool) -> PasswordPolicy {
        PasswordPolicy {
            length: 12,
            lowercase,
            uppercase,
            digits,
            symbols,
        }
    }

    #[test]
    fn full_pool_concatenates_in_category_order() {
        let pool = build(&policy(true, true, true, true)).unwrap();
        let expected: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS].concat();
        assert_eq!(pool, expected);
    }

    #[test]
    fn disabled_categories_are_absent() {
        let pool = build(&policy(true, false, true, false)).unwrap();
        assert_eq!(pool, [LOWERCASE, DIGITS].concat());
        assert!(pool.iter().all(|b| !UPPERCASE.contains(b)));
        assert!(pool.iter().all(|b| !SYMBOLS.contains(b)));
    }

    #[test]
    fn no_categories_is_an_error() {
        assert_eq!(
            build(&policy(false, false, false, false)),
            Err(GenerateError::NoCategorySelected)
        );
    }

    #[test]
    fn alphabets_are_disjoint_and_duplicate_free() {
        let pool = build(&policy(true, true, true, true)).unwrap();
        let mut seen = [false; 256];
        for &b in &pool {
            assert!(!seen[b as usize], "duplicate byte {b:?} in pool");
            seen[b as usize] = true;
        }
    }

    #[test]
    fn enabled_alphabets_follow_fixed_order() {
        let sets = enabled_alphabets(&policy(false, true, false, true));
        assert_eq!(sets, vec![UPPERCASE, SYMBOLS]);
    }
}
