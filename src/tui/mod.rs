//! Interactive TUI menus.

mod input;
mod menu;
mod text;

pub use text::print_help;

/// Run TUI interactive mode.
pub fn run() {
    menu::run_main_menu();
}
