//! Runtime configuration utilities for sirekap-sentiment.

use std::{env, path::PathBuf};

use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Gemini API credential; explanation calls are skipped when unset.
    pub gemini_api_key: Option<String>,
    /// Host address the API binds to.
    pub host: String,
    /// Port the API binds to.
    pub port: u16,
    /// Folder holding the pre-trained vectorizer and classifier artifacts.
    pub artifacts_dir: PathBuf,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8000);
        let artifacts_dir = env::var("ARTIFACTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./artifacts"));

        Ok(Self {
            gemini_api_key,
            host,
            port,
            artifacts_dir,
        })
    }
}
