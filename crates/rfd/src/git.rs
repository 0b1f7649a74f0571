//! Git integration
//!
//! Used only to locate the project root when `--root` is not given.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the git repository root directory containing `dir`
pub fn get_repo_root(dir: impl AsRef<Path>) -> Option<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(dir.as_ref())
        .output()
        .ok()?;

    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let root = stdout.trim();
        if !root.is_empty() {
            return Some(PathBuf::from(root));
        }
    }

    None
}

/// Project root: the enclosing git repository, else the current directory
pub fn default_root() -> PathBuf {
    get_repo_root(".").unwrap_or_else(|| PathBuf::from("."))
}
