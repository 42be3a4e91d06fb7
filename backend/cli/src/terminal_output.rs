//! Terminal output utilities: ANSI formatting, notes, and the result table.

use planty_core::{ErrorResponse, PlantInfo};

// ---------------------------------------------------------------------------
// ANSI Color/Style helpers
// ---------------------------------------------------------------------------

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Check if the terminal supports color output.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && (std::env::var("COLORTERM").is_ok()
            || std::env::var("TERM")
                .map(|t| t != "dumb")
                .unwrap_or(false))
}

/// Strip ANSI escape codes from a string.
pub fn strip_ansi(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm'
            for next in chars.by_ref() {
                if next == 'm' { break; }
            }
        } else {
            result.push(c);
        }
    }
    result
}

fn paint(s: &str, style: &str, color: bool) -> String {
    if color {
        format!("{style}{s}{RESET}")
    } else {
        s.to_string()
    }
}

// ---------------------------------------------------------------------------
// Formatted notes
// ---------------------------------------------------------------------------

/// Print a formatted INFO note to stdout.
pub fn note_info(msg: &str) {
    if supports_color() {
        println!("{CYAN}{BOLD}ℹ{RESET} {msg}");
    } else {
        println!("INFO: {msg}");
    }
}

/// Print a formatted ERROR note.
pub fn note_error(msg: &str) {
    if supports_color() {
        eprintln!("{RED}{BOLD}✗{RESET} {msg}");
    } else {
        eprintln!("ERROR: {msg}");
    }
}

// ---------------------------------------------------------------------------
// Table rendering
// ---------------------------------------------------------------------------

/// Render a two-column table with a header row and a dashed separator.
pub fn render_table(headers: [&str; 2], rows: &[(&str, String)], color: bool) -> String {
    let width = |s: &str| strip_ansi(s).chars().count();
    let first = rows
        .iter()
        .map(|(label, _)| width(label))
        .chain([width(headers[0])])
        .max()
        .unwrap_or(0);
    let second = rows
        .iter()
        .map(|(_, value)| width(value))
        .chain([width(headers[1])])
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let header = format!("  {}  {}", pad(headers[0], first), pad(headers[1], second));
    out.push_str(paint(header.trim_end(), BOLD, color).as_str());
    out.push('\n');
    out.push_str(&format!("  {}  {}\n", "-".repeat(first), "-".repeat(second)));
    for (label, value) in rows {
        let line = format!("  {}  {}", pad(label, first), value);
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn pad(s: &str, width: usize) -> String {
    let visible = strip_ansi(s).chars().count();
    format!("{s}{}", " ".repeat(width.saturating_sub(visible)))
}

/// Plant name, description, and the characteristics table.
pub fn render_plant(plant: &PlantInfo, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&paint(&plant.name, &format!("{GREEN}{BOLD}"), color));
    out.push('\n');
    out.push_str(&plant.description);
    out.push_str("\n\n");
    out.push_str(&render_table(["Characteristic", "Details"], &plant.characteristics(), color));
    out
}

/// Error message, details, and the stack dimmed underneath.
pub fn render_error(error: &ErrorResponse, color: bool) -> String {
    let mut out = paint(&error.error, &format!("{RED}{BOLD}"), color);
    out.push('\n');
    if let Some(details) = &error.details {
        out.push_str(&format!("Details: {details}\n"));
    }
    if let Some(stack) = &error.stack {
        out.push_str(&paint("Error Stack:", DIM, color));
        out.push('\n');
        for line in stack.lines() {
            out.push_str(&paint(&format!("  {line}"), DIM, color));
            out.push('\n');
        }
    }
    out
}
