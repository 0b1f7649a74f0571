//! New RFD command implementation

use anyhow::{Context, Result};
use chrono::Local;
use rfd::config::Config;
use rfd::constants::{MAX_DOCUMENT_NUMBER, UNKNOWN_AUTHOR};
use rfd::errors::RfdError;
use rfd::filename::{build_filename, format_number};
use rfd::index::DocumentIndex;
use rfd::template;
use rfd::theme;
use std::path::PathBuf;

/// Author recorded in new documents when `--author` is not given
pub fn default_author() -> String {
    std::env::var("USER")
        .ok()
        .map(|user| user.trim().to_string())
        .filter(|user| !user.is_empty())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}

/// Create the next numbered RFD from the template, returning its path
pub fn new_document(config: &Config, title: &str, author: Option<String>) -> Result<PathBuf> {
    // The heading pattern needs at least one character of title
    if title.trim().is_empty() {
        return Err(RfdError::EmptyTitle.into());
    }

    let index = DocumentIndex::from_config(config);
    let next = index.next_number();
    if next > MAX_DOCUMENT_NUMBER {
        return Err(RfdError::NumbersExhausted(next).into());
    }
    let number = format_number(next);
    let path = config.docs_directory.join(build_filename(next, title));

    let author = author.unwrap_or_else(default_author);
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();

    let mapping = [
        ("NUMBER", number.as_str()),
        ("TITLE", title),
        ("DATE", today.as_str()),
        ("AUTHOR", author.as_str()),
    ];

    template::instantiate(&config.template_file, &path, &mapping)
        .context("Failed to create RFD")?;

    println!("{} Created new RFD:", theme::success(theme::success_symbol()));
    println!("  Number: {}", theme::doc_number(&number));
    println!("  Title: {}", title);
    println!("  File: {}", path.display());

    Ok(path)
}
