//! Terminal output helpers: box drawing, screen control, styled text.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";

/// Width of every drawn box, in columns.
pub const BOX_WIDTH: usize = 60;

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text after raw mode).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

/// Print error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

/// Print box top with optional title: ┌─ Title ──...──┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let lead = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(lead.chars().count());
        println!("┌{}{}┐", lead, "─".repeat(remaining));
    }
}

/// Print box content line, left-aligned and padded to the box width.
pub fn box_line(content: &str) {
    let inner = BOX_WIDTH - 4;
    let width = content.chars().count();

    if width <= inner {
        println!("│ {}{} │", content, " ".repeat(inner - width));
    } else {
        println!("│ {} │", content);
    }
}

/// Print centered box content line.
pub fn box_line_center(content: &str) {
    let inner = BOX_WIDTH - 4;
    let width = content.chars().count();

    if width <= inner {
        let left = (inner - width) / 2;
        let right = inner - width - left;
        println!("│ {}{}{} │", " ".repeat(left), content, " ".repeat(right));
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └──...──┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option line: flag column plus wrapped description.
pub fn box_opt(flag: &str, desc: &str) {
    let inner = BOX_WIDTH - 4;
    let flag_col = 24;
    let desc_col = inner - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in desc.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= desc_col {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    match lines.first() {
        Some(first) => box_line(&format!("{flag_padded}{first}")),
        None => box_line(&flag_padded),
    }
    for line in lines.iter().skip(1) {
        box_line(&format!("{}{}", " ".repeat(flag_col), line));
    }
}
