//! CLI context - bundles the working policy and parsed flags.

use zeroize::Zeroize;

use crate::pass;
use crate::policy::{MAX_BATCH, PasswordPolicy};
use crate::tui::print_help;

use super::{CliFlags, prompts};

/// Early exit - not an error, just done.
pub struct Done;

pub struct Context {
    policy: PasswordPolicy,
    flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self, String> {
        let flags = super::parse(args).map_err(|e| e.to_string())?;
        Ok(Self {
            policy: PasswordPolicy::default(),
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        self.handle_check()?;
        self.apply_flags();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passmint {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    fn handle_check(&self) -> Result<(), Done> {
        if let Some(ref password) = self.flags.check {
            println!("{}", pass::evaluate(password));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags to the working policy.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.policy.length = len;
        }
        if self.flags.no_lowercase {
            self.policy.lowercase = false;
        }
        if self.flags.no_uppercase {
            self.policy.uppercase = false;
        }
        if self.flags.no_digits {
            self.policy.digits = false;
        }
        if self.flags.no_symbols {
            self.policy.symbols = false;
        }
    }

    /// Generate passwords and print them. A failing item reports its
    /// error and the batch continues; exits nonzero if nothing at all
    /// could be generated.
    fn generate_output(&mut self) {
        let requested = self.flags.number.unwrap_or(1);
        let count = requested.clamp(1, MAX_BATCH);
        if requested > MAX_BATCH {
            prompts::warn(&format!("Count limited to {MAX_BATCH} per run."));
        }

        let mut generated = 0usize;
        for _ in 0..count {
            match pass::generate(&self.policy) {
                Ok(mut password) => {
                    if self.flags.quiet {
                        println!("{password}");
                    } else {
                        let strength = pass::evaluate(&password);
                        println!("{password}  (Strength: {strength})");
                    }
                    password.zeroize();
                    generated += 1;
                }
                Err(e) => prompts::error(&e.to_string()),
            }
        }

        if generated == 0 {
            std::process::exit(1);
        }
    }
}
