//! Raw-mode line input with cursor editing.

use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, print_error, reset_terminal};

/// Which characters a prompt accepts.
enum Filter {
    Any,
    Digits,
}

impl Filter {
    fn accepts(&self, c: char) -> bool {
        match self {
            Filter::Any => c.is_ascii_graphic() || c == ' ',
            Filter::Digits => c.is_ascii_digit(),
        }
    }
}

/// Read one edited line. `None` means the user cancelled (Esc/Ctrl+Q).
/// Ctrl+C exits the process after resetting the terminal.
fn read_line(prompt: &str, initial: &str, filter: Filter) -> Option<String> {
    let mut input = initial.to_string();
    let mut cursor_pos = input.len() + 1; // 1-based: 1 = before first char
    let mut last_len = input.len();
    let mut cancelled = false;

    // RawModeGuard restores cooked mode even if we return early
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(input),
    };

    print!("{}: {}", prompt, input);
    flush();

    loop {
        let Ok(event) = read() else { break };
        let Event::Key(key_event) = event else {
            continue;
        };

        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                // process::exit skips destructors, reset first
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('q') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                cancelled = true;
                break;
            }
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                input.clear();
                cursor_pos = 1;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace => {
                if cursor_pos > 1 {
                    cursor_pos -= 1;
                    input.remove(cursor_pos - 1);
                }
            }
            KeyCode::Delete => {
                if cursor_pos <= input.len() {
                    input.remove(cursor_pos - 1);
                }
            }
            KeyCode::Left => cursor_pos = cursor_pos.saturating_sub(1).max(1),
            KeyCode::Right => cursor_pos = (cursor_pos + 1).min(input.len() + 1),
            KeyCode::Home => cursor_pos = 1,
            KeyCode::End => cursor_pos = input.len() + 1,
            KeyCode::Char(c) if filter.accepts(c) => {
                input.insert(cursor_pos - 1, c);
                cursor_pos += 1;
            }
            _ => {}
        }

        // Redraw the line and reposition the cursor
        print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
        print!("\r{}: {}", prompt, input);
        print!("\x1b[{}G", prompt.len() + 2 + cursor_pos);
        flush();
        last_len = input.len();
    }

    drop(_guard);
    println!();
    if cancelled { None } else { Some(input) }
}

/// Free-form line input. `None` means cancelled.
pub fn get_editable_input(prompt: &str, initial: &str) -> Option<String> {
    read_line(prompt, initial, Filter::Any)
}

/// Digits-only input. `None` means cancelled; an empty line parses as 0.
pub fn get_numeric_input(prompt: &str, initial: usize) -> Option<usize> {
    let seed = if initial > 0 {
        initial.to_string()
    } else {
        String::new()
    };

    let digits = read_line(prompt, &seed, Filter::Digits)?;
    if digits.is_empty() {
        Some(0)
    } else {
        digits.parse().ok()
    }
}

/// Yes/no question, re-asked until answered. `None` means cancelled.
pub fn get_yes_no(prompt: &str) -> Option<bool> {
    let prompt = format!("{prompt} (y/n)");
    loop {
        let answer = read_line(&prompt, "", Filter::Any)?;
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => return Some(true),
            "n" | "no" => return Some(false),
            _ => print_error("Invalid input. Please type 'y' or 'n'."),
        }
    }
}
