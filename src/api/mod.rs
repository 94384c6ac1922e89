//! HTTP layer exposing the sentiment prediction endpoint.

pub mod routes;
pub mod types;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{routing::post, Router};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{config::Settings, explain::Explainer, model::SentimentModel, nlp::Normalizer};

/// Per-process resources shared by every request; everything is read-only
/// after startup, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub normalizer: Arc<Normalizer>,
    pub model: Arc<SentimentModel>,
    pub explainer: Arc<Explainer>,
}

impl AppState {
    /// Build the full resource bundle from configuration. Artifact problems
    /// abort startup rather than letting the process serve degraded
    /// predictions.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let model = SentimentModel::load(&settings.artifacts_dir)?;
        Ok(Self {
            normalizer: Arc::new(Normalizer::new()),
            model: Arc::new(model),
            explainer: Arc::new(Explainer::from_settings(settings)?),
        })
    }
}

/// Build the application router; split out so tests can drive it directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(routes::predict))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(settings: Settings, host: String, port: u16) -> Result<()> {
    let state = AppState::from_settings(&settings)?;
    let app = router(state);

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving sirekap-sentiment API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
