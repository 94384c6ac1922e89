//! Gemini generateContent client producing reasons and keywords.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{parse, Explanation};
use crate::model::labels::Sentiment;

const GENERATE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

/// Upper bound on one explanation call; the classifier result must not wait
/// on a hung explainer longer than this.
const CALL_TIMEOUT: Duration = Duration::from_secs(20);

/// Thin client over the Generative Language API. One request per review,
/// no retries.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_endpoint(api_key, GENERATE_URL.to_string())
    }

    /// Client pointed at a custom endpoint; tests use this to stand in a
    /// local stub for the real service.
    pub fn with_endpoint(api_key: String, endpoint: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent("sirekap-sentiment/0.1")
            .timeout(CALL_TIMEOUT)
            .build()
            .context("building gemini http client")?;
        Ok(Self {
            client,
            api_key,
            endpoint,
        })
    }

    /// Ask Gemini to justify the decided label over the original review
    /// text. Every failure path degrades to [`Explanation::failed`]; no
    /// error crosses this boundary.
    pub async fn explain(&self, sentiment: Sentiment, text: &str) -> Explanation {
        let request = GenerateContentRequest::for_review(sentiment, text);
        let response = match self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "gemini request failed");
                return Explanation::failed();
            }
        };

        let status = response.status();
        debug!(%status, "gemini http status");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %truncate(&body, 600), "gemini returned non-success status");
            return Explanation::failed();
        }

        let payload = match response.json::<GenerateContentResponse>().await {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "gemini response body unreadable");
                return Explanation::failed();
            }
        };

        let Some(candidate_text) = payload.first_text() else {
            warn!("gemini response carried no candidate text");
            return Explanation::failed();
        };
        debug!(text = %truncate(&candidate_text, 200), "gemini raw text");

        match parse::explanation_from_text(&candidate_text) {
            Some(explanation) => explanation,
            None => {
                warn!("no JSON object found in gemini text");
                Explanation::failed()
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    role: &'static str,
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

impl GenerateContentRequest {
    fn for_review(sentiment: Sentiment, text: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart {
                    text: build_prompt(sentiment, text),
                }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<String> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .clone()
    }
}

/// The label is handed over as immutable ground truth; the model only
/// explains it.
fn build_prompt(sentiment: Sentiment, text: &str) -> String {
    format!(
        r#"Kamu adalah modul PENJELAS untuk sistem analisis sentimen ulasan aplikasi SIREKAP.

Model utama (Multinomial Naive Bayes) SUDAH MENENTUKAN label sentimen ulasan.
Label final dari model utama adalah: "{sentiment}" (Positif/Netral/Negatif).

Tugas kamu HANYA:
- Menjelaskan alasan (reason) kenapa ulasan ini masuk kategori tersebut
- Mengambil kata/frasa kunci penting (keywords) dari ulasan
- (Opsional) memberikan confidence versimu sendiri

ATURAN PENTING:
- Jangan mengubah label sentimen final.
- Jangan menulis apapun di luar JSON.

Format respons WAJIB:
{{
  "sentiment": "Positif" | "Netral" | "Negatif",
  "confidence": <angka 0-100>,
  "reason": "penjelasan singkat mengapa dikategorikan demikian",
  "keywords": ["kata1", "kata2", "kata3", "kata4", "kata5"]
}}

Ulasan pengguna: "{text}". Kembalikan JSON sesuai format."#
    )
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
