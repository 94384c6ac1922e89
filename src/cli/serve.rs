//! CLI entry-point for serving the HTTP API.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{api, config::Settings};

/// Run the Axum server.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Port to bind; defaults to the PORT environment setting.
    #[arg(long)]
    pub port: Option<u16>,
    /// Host address; defaults to the HOST environment setting.
    #[arg(long)]
    pub host: Option<String>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let host = args.host.clone().unwrap_or_else(|| settings.host.clone());
    let port = args.port.unwrap_or(settings.port);
    api::serve(settings, host, port).await
}
