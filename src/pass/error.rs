use thiserror::Error;

/// Recoverable generation failures. The caller presents a message and
/// re-prompts or skips the item; nothing here is fatal to the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// All four category flags are off, so the character pool is empty.
    #[error("no character categories selected; enable at least one")]
    NoCategorySelected,

    /// Length is zero, or too short to seat one character from every
    /// enabled category.
    #[error("password length must be positive and at least the number of enabled categories")]
    InvalidLength,
}
