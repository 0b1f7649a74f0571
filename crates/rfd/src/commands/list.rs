//! List command implementation

use crate::cli::ListFormat;
use anyhow::{Context, Result};
use colored::*;
use rfd::config::Config;
use rfd::doc::RfdMetadata;
use rfd::errors::print_warning;
use rfd::index::DocumentIndex;
use rfd::theme;

pub fn list_documents(config: &Config, format: ListFormat) -> Result<()> {
    let index = DocumentIndex::from_config(config);
    let docs = index.load_all().context("Failed to read RFD metadata")?;

    match format {
        ListFormat::Json => println!("{}", render_json(&docs)?),
        ListFormat::Table => {
            if docs.is_empty() {
                print_warning(&format!(
                    "No RFD files found in {}",
                    config.docs_directory.display()
                ));
                return Ok(());
            }

            println!("{}\n", "Requests for Discussion".bold());
            for doc in &docs {
                println!("{}", render_line(doc));
            }
            println!("\n{} {} document(s)", theme::info(theme::info_symbol()), docs.len());
        }
    }

    Ok(())
}

fn render_json(docs: &[RfdMetadata]) -> Result<String> {
    serde_json::to_string_pretty(docs).context("Failed to serialize RFD metadata")
}

fn render_line(doc: &RfdMetadata) -> String {
    format!(
        "{}  {:<10}  {}  {} {}",
        theme::doc_number(&doc.number),
        theme::status_badge(&doc.status),
        doc.date,
        doc.title,
        format!("({})", doc.author).dimmed()
    )
}
