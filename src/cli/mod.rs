//! Command-line interface wiring for sirekap-sentiment.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod clean;
pub mod predict;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "SIREKAP review sentiment service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::run(args, settings).await,
            Commands::Predict(args) => predict::run(args, settings).await,
            Commands::Clean(args) => clean::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the prediction API.
    Serve(serve::Args),
    /// Classify a single review from the command line.
    Predict(predict::Args),
    /// Print the normalized form of a text (preprocessing debug aid).
    Clean(clean::Args),
}
