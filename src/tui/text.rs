use crate::policy::PasswordPolicy;
use crate::terminal::{
    box_bottom, box_line, box_line_center, box_opt, box_top, flush, print_error,
};

fn on_off(enabled: bool) -> &'static str {
    if enabled { "yes" } else { "no" }
}

pub fn enter_prompt() -> &'static str {
    "Enter menu option"
}

pub fn print_main_menu(print_invalid: &mut bool) {
    box_top("Main Menu");
    box_line("");
    box_line("  1) view policy");
    box_line("  2) change policy");
    box_line("  3) generate a password");
    box_line("  4) generate multiple passwords");
    box_line("  5) quit");
    box_line("");
    box_bottom();

    // Error message (or blank line if no error)
    if *print_invalid {
        print_error("Invalid option.");
        *print_invalid = false;
    } else {
        println!();
    }
    flush();
}

pub fn print_policy(policy: &PasswordPolicy) {
    box_top("Current Policy");
    box_line(&format!("Length         : {}", policy.length));
    box_line(&format!("Lowercase (a-z): {}", on_off(policy.lowercase)));
    box_line(&format!("Uppercase (A-Z): {}", on_off(policy.uppercase)));
    box_line(&format!("Digits (0-9)   : {}", on_off(policy.digits)));
    box_line(&format!("Symbols        : {}", on_off(policy.symbols)));
    box_bottom();
    println!();
}

pub fn print_help() {
    box_top("Passmint");
    box_line_center("Policy-driven password generator");
    box_line("");
    box_line("Run without arguments for the interactive menu.");
    box_line("");
    box_line("USAGE:");
    box_line("  passmint [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_opt("  -l, --length <N>", "Characters per password (default: 12)");
    box_opt("  -n, --number <N>", "How many to generate (1-50)");
    box_opt("      --no-lowercase", "Exclude lowercase letters");
    box_opt("      --no-uppercase", "Exclude uppercase letters");
    box_opt("      --no-digits", "Exclude digits");
    box_opt("      --no-symbols", "Exclude symbols");
    box_opt("      --check <PASS>", "Print a strength label for PASS and exit");
    box_opt("  -q, --quiet", "Print passwords only, no strength column");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passmint -l 16           One password, 16 characters");
    box_line("  passmint -l 20 -n 3      Three passwords, 20 characters");
    box_line("  passmint --no-symbols    Alphanumeric only");
    box_bottom();
    println!();
}
