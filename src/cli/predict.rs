//! CLI entry-point for one-shot classification of a single review.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    api::{routes, AppState},
    config::Settings,
};

/// Args for the `predict` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Review text to classify.
    #[arg(long)]
    pub text: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let state = AppState::from_settings(&settings)?;
    match routes::classify_review(&state, None, &args.text).await {
        Ok(response) => println!("{}", serde_json::to_string_pretty(&response)?),
        Err(err) => println!("{}", serde_json::json!({ "error": err.to_string() })),
    }
    Ok(())
}
