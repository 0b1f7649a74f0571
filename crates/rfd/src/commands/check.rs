//! Check command implementation

use anyhow::{bail, Result};
use colored::*;
use rfd::config::Config;
use rfd::errors::print_warning;
use rfd::index::DocumentIndex;
use rfd::theme;

/// Parse every document and report each one that fails
pub fn check_documents(config: &Config) -> Result<()> {
    let index = DocumentIndex::from_config(config);

    if index.is_empty() {
        print_warning(&format!("No RFD files found in {}", config.docs_directory.display()));
        return Ok(());
    }

    println!("{}\n", "Checking RFDs...".bold());

    let mut failures = 0;
    for (path, outcome) in index.check_all() {
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        match outcome {
            Ok(_) => println!("  {} {}", theme::success(theme::success_symbol()), name),
            Err(e) => {
                failures += 1;
                println!("  {} {}", theme::error_symbol().red(), name);
                println!("    {}", e.to_string().red());
            }
        }
    }

    println!();
    if failures > 0 {
        bail!("{} of {} RFD(s) failed validation", failures, index.len());
    }

    println!("{} All {} RFD(s) are valid", theme::success(theme::success_symbol()), index.len());
    Ok(())
}
