//! Document discovery and numbering

use crate::config::Config;
use crate::constants::{DOCUMENT_GLOB, TABLE_HEADER};
use crate::doc::RfdMetadata;
use crate::errors::RfdError;
use glob::Pattern;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

static DOCUMENT_PATTERN: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::new(DOCUMENT_GLOB).unwrap());

/// Whether `file_name` looks like a numbered document (`NNNN-*.md`)
pub fn is_document_name(file_name: &str) -> bool {
    DOCUMENT_PATTERN.matches(file_name)
}

/// The set of numbered documents in a directory
pub struct DocumentIndex {
    paths: Vec<PathBuf>,
}

impl DocumentIndex {
    /// Scan `docs_dir` for documents, ignoring the file at `exclude`
    ///
    /// A missing directory yields an empty index.
    pub fn new(docs_dir: impl AsRef<Path>, exclude: Option<&Path>) -> Self {
        let exclude_name = exclude.and_then(|p| p.file_name()).map(|n| n.to_os_string());

        let mut paths: Vec<PathBuf> = WalkDir::new(docs_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                exclude_name.as_deref() != Some(entry.file_name())
                    && is_document_name(&entry.file_name().to_string_lossy())
            })
            .map(|entry| entry.into_path())
            .collect();

        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        DocumentIndex { paths }
    }

    /// Scan the configured documents directory, skipping the template
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.docs_directory, Some(config.template_file.as_path()))
    }

    /// Document paths sorted by file name
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Get the next available document number
    ///
    /// One past the highest existing number; gaps are never reused.
    pub fn next_number(&self) -> u32 {
        self.paths
            .iter()
            .filter_map(|p| p.file_name())
            .filter_map(|n| n.to_str()?.get(..4)?.parse::<u32>().ok())
            .max()
            .map(|n| n + 1)
            .unwrap_or(1)
    }

    /// Extract metadata from every document, stopping at the first failure
    pub fn load_all(&self) -> Result<Vec<RfdMetadata>, RfdError> {
        self.paths.iter().map(|p| RfdMetadata::from_file(p)).collect()
    }

    /// Extract metadata from every document, keeping each outcome
    pub fn check_all(&self) -> Vec<(&Path, Result<RfdMetadata, RfdError>)> {
        self.paths.iter().map(|p| (p.as_path(), RfdMetadata::from_file(p))).collect()
    }
}

/// Next unused document number in `docs_dir`
pub fn next_number(docs_dir: impl AsRef<Path>) -> u32 {
    DocumentIndex::new(docs_dir, None).next_number()
}

/// Render the markdown index table for `docs`, in the order given
///
/// Each number links to `<link_prefix>/<file name>`.
pub fn render_table(docs: &[RfdMetadata], link_prefix: &str) -> String {
    let mut table = String::from(TABLE_HEADER);

    for doc in docs {
        let link = if link_prefix.is_empty() {
            doc.file_name.clone()
        } else {
            format!("{}/{}", link_prefix, doc.file_name)
        };
        table.push_str(&format!(
            "\n| [{}]({}) | {} | {} | {} |",
            doc.number,
            link,
            escape_cell(&doc.title),
            escape_cell(&doc.status),
            escape_cell(&doc.date)
        ));
    }

    table
}

/// Escape pipes so cell text cannot split a table row
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
