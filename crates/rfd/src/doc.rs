//! RFD document metadata and parsing

use crate::errors::RfdError;
use crate::filename::number_from_path;
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# RFD (?P<number>\d+): (?P<title>.+)$").unwrap());

static META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?s)<!-- RFD-META\s*",
        r"Status:\s*(?P<status>\w+)\s*",
        r"Date:\s*(?P<date>.+?)\s*",
        r"Author:\s*(?P<author>.+?)\s*-->",
    ))
    .unwrap()
});

/// Matcher for the `# RFD <number>: <title>` heading line
pub fn heading_pattern() -> &'static Regex {
    &HEADING_RE
}

/// Matcher for the `<!-- RFD-META ... -->` block
pub fn meta_pattern() -> &'static Regex {
    &META_RE
}

/// Number and title recovered from a document heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub number: String,
    pub title: String,
}

impl Heading {
    /// Find the first RFD heading in `content`
    pub fn find(content: &str) -> Option<Self> {
        let caps = heading_pattern().captures(content)?;
        Some(Heading {
            number: caps["number"].to_string(),
            title: caps["title"].trim().to_string(),
        })
    }
}

/// Status, date and author recovered from an `RFD-META` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaBlock {
    pub status: String,
    pub date: String,
    pub author: String,
}

impl MetaBlock {
    /// Find the first metadata block in `content`
    pub fn find(content: &str) -> Option<Self> {
        let caps = meta_pattern().captures(content)?;
        Some(MetaBlock {
            status: caps["status"].to_string(),
            date: caps["date"].to_string(),
            author: caps["author"].to_string(),
        })
    }
}

/// Read-only view of an RFD document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RfdMetadata {
    pub number: String,
    pub title: String,
    pub status: String,
    pub date: String,
    pub author: String,
    /// File name of the document (e.g. `0001-foo.md`)
    #[serde(skip)]
    pub file_name: String,
}

impl RfdMetadata {
    /// Read and parse the document at `path`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RfdError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| RfdError::io(path, e))?;
        Self::parse(path, &content)
    }

    /// Parse document `content`, cross-checking the number against `path`
    ///
    /// The heading and the metadata block are both required; a filename
    /// whose number disagrees with the heading is rejected rather than
    /// corrected.
    pub fn parse(path: &Path, content: &str) -> Result<Self, RfdError> {
        let from_path = number_from_path(path);

        let heading =
            Heading::find(content).ok_or_else(|| RfdError::MissingHeading(path.to_path_buf()))?;

        if heading.number != from_path {
            return Err(RfdError::NumberMismatch {
                path: path.to_path_buf(),
                from_path,
                from_heading: heading.number,
            });
        }

        let meta =
            MetaBlock::find(content).ok_or_else(|| RfdError::MissingMetadata(path.to_path_buf()))?;

        Ok(RfdMetadata {
            number: heading.number,
            title: heading.title,
            status: meta.status,
            date: meta.date,
            author: meta.author,
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        })
    }
}
