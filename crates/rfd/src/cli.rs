//! CLI argument parsing

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rfd")]
#[command(about = "Request for Discussion Document Manager", long_about = None)]
#[command(after_help = "Use 'rfd <command> --help' for more information about a command.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project root (defaults to the enclosing git repository, else .)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new RFD from the template
    New {
        /// Title of the new RFD
        title: String,

        /// Author name (defaults to $USER)
        #[arg(short, long)]
        author: Option<String>,
    },

    /// Update the RFD index in README.md
    #[command(visible_alias = "update-index")]
    Index,

    /// List all RFDs
    #[command(visible_alias = "ls")]
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,
    },

    /// Check that every RFD has a valid heading and metadata block
    #[command(visible_alias = "validate")]
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Table,
    Json,
}
