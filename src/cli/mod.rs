mod context;
mod flags;
mod parse;
mod prompts;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

/// Run flag-driven CLI mode.
pub fn run(args: &[String]) {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(msg) => {
            prompts::error(&msg);
            prompts::usage_hint();
            std::process::exit(2);
        }
    };
    let _ = ctx.run();
}
