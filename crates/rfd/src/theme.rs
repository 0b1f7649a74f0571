//! Color theme for consistent output

use colored::*;

/// Color for success messages
pub fn success(msg: &str) -> ColoredString {
    msg.green()
}

/// Color for info messages
pub fn info(msg: &str) -> ColoredString {
    msg.cyan()
}

/// Color for document numbers
pub fn doc_number(num: &str) -> ColoredString {
    num.bold()
}

/// Color for status badges
pub fn status_badge(status: &str) -> ColoredString {
    match status.to_lowercase().as_str() {
        "draft" => status.yellow(),
        "discussion" | "review" => status.cyan(),
        "published" | "accepted" => status.green(),
        "final" | "committed" => status.green().bold(),
        "abandoned" | "rejected" | "withdrawn" => status.red(),
        _ => status.white(),
    }
}

/// Symbol for success
pub fn success_symbol() -> &'static str {
    "✓"
}

/// Symbol for error
pub fn error_symbol() -> &'static str {
    "✗"
}

/// Symbol for info
pub fn info_symbol() -> &'static str {
    "→"
}
