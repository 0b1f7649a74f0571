//! Slug generation and document filename handling

use crate::constants::FALLBACK_SLUG;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9-]+").unwrap());
static DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Normalize a title into a filesystem-safe slug
///
/// The result contains only `[a-z0-9-]`, never two dashes in a row, and no
/// leading or trailing dash. Degenerate titles (e.g. `"!!!"`) give an empty
/// string; [`build_filename`] substitutes a fallback in that case.
pub fn slugify(title: &str) -> String {
    let lower = title.trim().to_lowercase();
    let replaced = DISALLOWED.replace_all(&lower, "-");
    let collapsed = DASHES.replace_all(&replaced, "-");
    collapsed.trim_matches('-').to_string()
}

/// Format a document number with four-digit zero padding
pub fn format_number(number: u32) -> String {
    format!("{:04}", number)
}

/// Build a document filename with number prefix
pub fn build_filename(number: u32, title: &str) -> String {
    let slug = slugify(title);
    let slug = if slug.is_empty() { FALLBACK_SLUG.to_string() } else { slug };
    format!("{}-{}.md", format_number(number), slug)
}

/// Text of the file stem before the first dash (`"0001"` for `0001-foo.md`)
pub fn number_from_path(path: &Path) -> String {
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    stem.split('-').next().unwrap_or_default().to_string()
}
