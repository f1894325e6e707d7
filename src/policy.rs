//! Password generation policy.

/// Practical minimum length the interactive prompts enforce. The core
/// generator itself only rejects zero and lengths below the
/// enabled-category count.
pub const MIN_LENGTH: usize = 4;

/// Upper bound on batch size for interactive and CLI generation.
pub const MAX_BATCH: usize = 50;

/// User-chosen constraints governing generation: requested length and
/// which character categories the password may draw from.
///
/// The value is immutable while a generation call runs; the TUI and CLI
/// build a fresh copy before each batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl PasswordPolicy {
    /// Number of enabled character categories (0..=4).
    pub fn enabled_count(&self) -> usize {
        [self.lowercase, self.uppercase, self.digits, self.symbols]
            .iter()
            .filter(|&&on| on)
            .count()
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            length: 12,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }
}
