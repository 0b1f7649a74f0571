//! Constants used throughout the rfd crate

/// Documents directory, relative to the project root
pub const DOCS_DIR: &str = "docs/rfds";

/// Template file, relative to the project root
pub const TEMPLATE_FILE: &str = "docs/rfds/_template.md.tpl";

/// Host file carrying the generated index, relative to the project root
pub const README_FILE: &str = "docs/README.md";

/// Optional per-project configuration file, relative to the project root
pub const CONFIG_FILENAME: &str = ".rfd.toml";

pub const INDEX_START_MARKER: &str = "<!-- BEGIN RFD INDEX -->";
pub const INDEX_END_MARKER: &str = "<!-- END RFD INDEX -->";

/// Glob matched against file names when scanning for documents
pub const DOCUMENT_GLOB: &str = "[0-9][0-9][0-9][0-9]-*.md";

/// Highest number that still fits the four-digit filename prefix
pub const MAX_DOCUMENT_NUMBER: u32 = 9999;

/// Slug used when a title normalizes to nothing
pub const FALLBACK_SLUG: &str = "untitled";

/// Author used when neither `--author` nor `$USER` is available
pub const UNKNOWN_AUTHOR: &str = "unknown";

/// Header rows of the generated index table
pub const TABLE_HEADER: &str = "| RFD | Title | Status | Date |\n|-----|-------|---------|------|";
