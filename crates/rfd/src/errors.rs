//! Error types and error reporting utilities

use colored::*;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RfdError {
    #[error("Template not found at {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("{} already exists", .0.display())]
    OutputExists(PathBuf),

    #[error("RFD numbers are exhausted: {0} does not fit in four digits")]
    NumbersExhausted(u32),

    #[error("RFD title must not be empty")]
    EmptyTitle,

    #[error("{} does not exist", .0.display())]
    HostNotFound(PathBuf),

    #[error("Could not find markers '{start}' and '{end}' in {}", .path.display())]
    MarkersNotFound { path: PathBuf, start: String, end: String },

    #[error("No RFD title found in {}", .0.display())]
    MissingHeading(PathBuf),

    #[error(
        "Mismatch in {}: filename has {from_path}, title has {from_heading}",
        .path.display()
    )]
    NumberMismatch { path: PathBuf, from_path: String, from_heading: String },

    #[error("No RFD-META found in {}", .0.display())]
    MissingMetadata(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RfdError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RfdError::Io { path: path.into(), source }
    }
}

/// Print a formatted error message
pub fn print_error(context: &str, error: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), context);
    eprintln!("  {}", error.to_string().red());

    // Show chain of causes
    for cause in error.chain().skip(1) {
        eprintln!("  {} {}", "Caused by:".dimmed(), cause.to_string().dimmed());
    }
}

/// Print an error with a suggestion
pub fn print_error_with_suggestion(context: &str, error: &anyhow::Error, suggestion: &str) {
    print_error(context, error);
    eprintln!("\n{} {}", "Suggestion:".cyan().bold(), suggestion);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "Warning:".yellow().bold(), message);
}
