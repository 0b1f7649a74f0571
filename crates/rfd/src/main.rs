//! Request for Discussion CLI tool

use anyhow::Result;
use clap::Parser;
use rfd::config::Config;
use rfd::constants::CONFIG_FILENAME;
use rfd::git;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let root = cli.root.unwrap_or_else(git::default_root);

    let config = match Config::load(&root) {
        Ok(config) => config,
        Err(e) => {
            rfd::errors::print_error_with_suggestion(
                "Failed to load configuration",
                &e,
                &format!("Check the syntax of {}", root.join(CONFIG_FILENAME).display()),
            );
            std::process::exit(1);
        }
    };

    // Execute the command
    let result = match cli.command {
        Commands::New { title, author } => new_document(&config, &title, author).map(|_| ()),
        Commands::Index => update_index(&config),
        Commands::List { format } => list_documents(&config, format),
        Commands::Check => check_documents(&config),
    };

    if let Err(e) = result {
        rfd::errors::print_error("Command failed", &e);
        std::process::exit(1);
    }

    Ok(())
}
