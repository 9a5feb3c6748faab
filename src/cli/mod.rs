//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod countries;
pub mod generate;

use clap::{Parser, Subcommand};

/// Random coordinates inside country boundaries
#[derive(Parser)]
#[command(name = "terrapoint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sample random points inside countries
    Generate(generate::GenerateArgs),

    /// List the canonical country names in the bundled dataset
    Countries(countries::CountriesArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate::run(args),
        Commands::Countries(args) => countries::run(args),
        Commands::Config(args) => config::run(args),
    }
}
