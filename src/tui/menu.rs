//! Main menu loop and generation flows.

use zeroize::Zeroize;

use crate::pass;
use crate::policy::{MAX_BATCH, MIN_LENGTH, PasswordPolicy};
use crate::terminal::{box_bottom, box_line, box_top, clear, print_error, reset_terminal};

use super::input::{get_editable_input, get_numeric_input, get_yes_no};
use super::text::{enter_prompt, print_main_menu, print_policy};

pub fn run_main_menu() {
    reset_terminal();
    clear();

    let mut policy = PasswordPolicy::default();
    let mut print_invalid = false;

    loop {
        print_main_menu(&mut print_invalid);

        let choice = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                clear();
                continue;
            }
        };

        match choice.trim() {
            "1" => {
                clear();
                print_policy(&policy);
            }
            "2" => {
                clear();
                if let Some(updated) = prompt_for_policy(&policy) {
                    policy = updated;
                    print_policy(&policy);
                } else {
                    // Cancelled mid-edit, keep the old policy
                    clear();
                }
            }
            "3" => {
                clear();
                generate_single(&policy);
            }
            "4" => {
                clear();
                generate_batch(&policy);
            }
            "5" | "q" => {
                clear();
                break;
            }
            _ => {
                clear();
                print_invalid = true;
            }
        }
    }
}

/// Interactively build a new policy. `None` means the user cancelled;
/// the caller keeps the previous policy in that case.
fn prompt_for_policy(current: &PasswordPolicy) -> Option<PasswordPolicy> {
    box_top("Configure Policy");
    box_line("Esc/Ctrl+Q: cancel | Ctrl+U: clear input");
    box_bottom();
    println!();

    let length = loop {
        let len = get_numeric_input("Enter desired password length", current.length)?;
        if len >= MIN_LENGTH {
            break len;
        }
        print_error(&format!("Please enter a length of at least {MIN_LENGTH}."));
    };

    let lowercase = get_yes_no("Include lowercase letters (a-z)?")?;
    let uppercase = get_yes_no("Include uppercase letters (A-Z)?")?;
    let digits = get_yes_no("Include digits (0-9)?")?;
    let symbols = get_yes_no("Include symbols (!,@,#,...)?")?;

    let mut policy = PasswordPolicy {
        length,
        lowercase,
        uppercase,
        digits,
        symbols,
    };

    if policy.enabled_count() == 0 {
        print_error("At least one character category is required. Enabling all four.");
        policy = PasswordPolicy {
            length,
            ..PasswordPolicy::default()
        };
    }

    clear();
    Some(policy)
}

fn generate_single(policy: &PasswordPolicy) {
    match pass::generate(policy) {
        Ok(mut password) => {
            let strength = pass::evaluate(&password);
            box_top("Generated Password");
            box_line(&password);
            box_line(&format!("Strength: {strength}"));
            box_bottom();
            println!();
            password.zeroize();
        }
        Err(e) => print_error(&format!("Error: {e}")),
    }
}

/// Generate a bounded batch. A failing item reports its error and the
/// batch continues.
fn generate_batch(policy: &PasswordPolicy) {
    let count = loop {
        let n = match get_numeric_input(
            &format!("How many passwords (1-{MAX_BATCH})"),
            0,
        ) {
            Some(n) => n,
            None => return,
        };
        if (1..=MAX_BATCH).contains(&n) {
            break n;
        }
        print_error(&format!("Please enter a count between 1 and {MAX_BATCH}."));
    };

    println!();
    for i in 1..=count {
        match pass::generate(policy) {
            Ok(mut password) => {
                let strength = pass::evaluate(&password);
                println!("{i:2}. {password}  (Strength: {strength})");
                password.zeroize();
            }
            Err(e) => print_error(&format!("{i:2}. Error generating password: {e}")),
        }
    }
    println!();
}
