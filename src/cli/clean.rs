//! CLI entry-point for inspecting the preprocessing pipeline output.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, nlp::Normalizer};

/// Args for the `clean` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Text to run through the normalization pipeline.
    #[arg(long)]
    pub text: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let _ = settings;
    let normalizer = Normalizer::new();
    println!("{}", normalizer.normalize(&args.text));
    Ok(())
}
