//! Password generation and strength estimation.

pub mod charset;
mod error;
mod generate;
pub mod strength;

pub use error::GenerateError;
pub use generate::generate;
pub use strength::{Strength, evaluate};
