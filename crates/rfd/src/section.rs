//! Replacement of a marker-delimited region inside a host file

use crate::errors::RfdError;
use std::fs;
use std::path::Path;

/// Replace whatever lies between `start` and `end` in `content`
///
/// Returns `None` if either marker is missing or `end` does not follow
/// `start`. The markers stay on their own lines; everything before `start`
/// and from `end` onward is kept byte for byte.
pub fn replace_section(content: &str, start: &str, end: &str, new_content: &str) -> Option<String> {
    let start_idx = content.find(start)?;
    let after_start = start_idx + start.len();
    let end_idx = after_start + content[after_start..].find(end)?;

    let before = &content[..after_start];
    let after = &content[end_idx..];

    Some(format!("{}\n{}\n{}", before, new_content, after))
}

/// Rewrite the marked section of the file at `path`
///
/// The file is left untouched on any error.
pub fn update_file_section(
    path: &Path,
    start: &str,
    end: &str,
    new_content: &str,
) -> Result<(), RfdError> {
    if !path.is_file() {
        return Err(RfdError::HostNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|e| RfdError::io(path, e))?;

    let updated = replace_section(&content, start, end, new_content).ok_or_else(|| {
        RfdError::MarkersNotFound {
            path: path.to_path_buf(),
            start: start.to_string(),
            end: end.to_string(),
        }
    })?;

    fs::write(path, updated).map_err(|e| RfdError::io(path, e))
}
