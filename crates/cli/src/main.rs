//! Sunglasses CLI - dataset validation tooling.
//!
//! # Usage
//!
//! ```bash
//! # Validate the JSON dataset in ./data
//! sunglasses-cli check-data
//!
//! # Validate a dataset somewhere else
//! sunglasses-cli check-data --data-dir /srv/sunglasses/data
//! ```
//!
//! # Commands
//!
//! - `check-data` - Verify dataset referential integrity

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "sunglasses-cli")]
#[command(author, version, about = "Sunglasses API data tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify dataset referential integrity
    CheckData {
        /// Directory holding users.json, brands.json and products.json
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::CheckData { data_dir } => commands::check_data::check(&data_dir)?,
    }
    Ok(())
}
