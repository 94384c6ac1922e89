//! Request/response DTOs for the prediction endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::model::labels::Sentiment;

#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub reason: String,
    pub keywords: Vec<String>,
    pub probs: Probs,
    pub nb_debug: NbDebug,
}

/// Full three-label probability map; the keys are always exactly the known
/// labels, whatever the classifier artifact carries.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Probs {
    pub positif: f64,
    pub netral: f64,
    pub negatif: f64,
}

/// Diagnostic block mirroring the raw classifier output, for observability.
#[derive(Debug, Clone, Serialize)]
pub struct NbDebug {
    pub raw_label: String,
    pub classes: Vec<String>,
    pub proba: Vec<f64>,
    pub clean_text: String,
}

/// Recoverable input problems. Reported as `{"error": …}` with a 200
/// status; callers check for the `error` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Teks tidak boleh kosong")]
    Empty,
    #[error("Teks terlalu pendek atau tidak mengandung kata bermakna setelah preprocessing.")]
    NothingMeaningful,
}

impl IntoResponse for InputError {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
