//! Rough password strength estimate.
//!
//! Deliberately approximate: length plus character variety, no
//! dictionary or pattern analysis.

use super::charset::SYMBOLS;

/// Strength label for a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Score a password: character count plus two points per satisfied
/// variety predicate (lowercase, uppercase, digit, symbol). Pure and
/// deterministic, no error cases.
pub fn evaluate(password: &str) -> Strength {
    let length_score = password.chars().count();

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.bytes().any(|b| SYMBOLS.contains(&b));

    let variety_score = [has_lower, has_upper, has_digit, has_symbol]
        .iter()
        .filter(|&&hit| hit)
        .count();

    let total = length_score + 2 * variety_score;

    match total {
        0..10 => Strength::Weak,
        10..18 => Strength::Moderate,
        18..26 => Strength::Strong,
        _ => Strength::VeryStrong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_chars_all_categories_is_strong() {
        // 12 + 2*4 = 20
        assert_eq!(evaluate("aB3!aB3!aB3!"), Strength::Strong);
    }

    #[test]
    fn eight_lowercase_is_moderate() {
        // 8 + 2*1 = 10, on the Weak/Moderate boundary
        assert_eq!(evaluate("abcdefgh"), Strength::Moderate);
    }

    #[test]
    fn below_ten_is_weak() {
        // 7 + 2*1 = 9
        assert_eq!(evaluate("abcdefg"), Strength::Weak);
        assert_eq!(evaluate(""), Strength::Weak);
    }

    #[test]
    fn strong_boundary_at_eighteen() {
        // 14 + 2*2 = 18
        assert_eq!(evaluate("abcdefghijklm1"), Strength::Strong);
        // 13 + 2*2 = 17
        assert_eq!(evaluate("abcdefghijkl1"), Strength::Moderate);
    }

    #[test]
    fn very_strong_boundary_at_twenty_six() {
        // 18 + 2*4 = 26
        assert_eq!(evaluate("aB3!aB3!aB3!aB3!aB"), Strength::VeryStrong);
        // 17 + 2*4 = 25
        assert_eq!(evaluate("aB3!aB3!aB3!aB3!a"), Strength::Strong);
    }

    #[test]
    fn only_fixed_symbol_set_counts_as_symbols() {
        // Space and '~' are outside the symbol alphabet: 10 + 2*1 = 12.
        assert_eq!(evaluate("abcdefgh ~"), Strength::Moderate);
        // At length 15 the symbol predicate decides the label:
        // 15 + 2*2 = 19 Strong with '!', 15 + 2*1 = 17 Moderate with '~'.
        assert_eq!(evaluate("abcdefghijklmn!"), Strength::Strong);
        assert_eq!(evaluate("abcdefghijklmn~"), Strength::Moderate);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let pass = "aB3!aB3!aB3!";
        assert_eq!(evaluate(pass), evaluate(pass));
    }
}
