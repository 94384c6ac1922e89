//! Best-effort natural-language explanation of an already-decided label.
//!
//! The classifier's verdict is the product; the explanation is garnish.
//! Nothing in this module is allowed to fail past its own boundary: every
//! code path returns a well-formed [`Explanation`].

pub mod gemini;
pub mod parse;

use anyhow::Result;
use tracing::warn;

use crate::{config::Settings, model::labels::Sentiment};
use gemini::GeminiClient;

/// Reason used when the explainer is not configured.
pub const DEFAULT_REASON: &str =
    "Prediksi berdasarkan model Multinomial Naive Bayes yang dilatih pada ulasan SIREKAP.";

/// Reason used when the explainer was called but failed.
pub const FAILURE_REASON: &str =
    "Prediksi berdasarkan model Multinomial Naive Bayes. Modul penjelas (Gemini) gagal dipanggil.";

/// Human-readable justification for a decided sentiment label. `reason` is
/// always non-empty; `keywords` may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub reason: String,
    pub keywords: Vec<String>,
}

impl Explanation {
    /// The answer when no explanation service is configured.
    pub fn unconfigured() -> Self {
        Self {
            reason: DEFAULT_REASON.to_string(),
            keywords: Vec::new(),
        }
    }

    /// The answer when the explanation service could not be used.
    pub fn failed() -> Self {
        Self {
            reason: FAILURE_REASON.to_string(),
            keywords: Vec::new(),
        }
    }
}

/// Explanation capability for the prediction flow.
pub enum Explainer {
    /// No credential configured; answer with the fixed default and make no
    /// network call.
    Disabled,
    /// Gemini-backed explanations.
    Gemini(GeminiClient),
}

impl Explainer {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        match settings.gemini_api_key.as_deref() {
            Some(key) => Ok(Self::Gemini(GeminiClient::new(key.to_string())?)),
            None => {
                warn!("GEMINI_API_KEY not set; explanation module disabled");
                Ok(Self::Disabled)
            }
        }
    }

    /// Produce a justification for the decided label over the original
    /// review text. Infallible by design; service failures degrade to a
    /// fallback value.
    pub async fn explain(&self, sentiment: Sentiment, text: &str) -> Explanation {
        match self {
            Self::Disabled => Explanation::unconfigured(),
            Self::Gemini(client) => client.explain(sentiment, text).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_explainer_answers_immediately() {
        let explainer = Explainer::Disabled;
        for sentiment in [Sentiment::Positif, Sentiment::Netral, Sentiment::Negatif] {
            let explanation = explainer.explain(sentiment, "aplikasi bagus").await;
            assert_eq!(explanation.reason, DEFAULT_REASON);
            assert!(explanation.keywords.is_empty());
        }
    }

    #[test]
    fn missing_credential_disables_the_explainer() {
        let settings = Settings {
            gemini_api_key: None,
            host: "127.0.0.1".into(),
            port: 8000,
            artifacts_dir: "./artifacts".into(),
        };
        assert!(matches!(
            Explainer::from_settings(&settings),
            Ok(Explainer::Disabled)
        ));
    }
}
