//! HTTP route handlers for Axum: the classify-then-explain orchestration.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    Json,
};
use tracing::info;

use crate::{
    api::types::{InputError, NbDebug, PredictRequest, PredictResponse, Probs},
    model::labels::{RawLabel, Sentiment},
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, InputError>;

/// `POST /predict` with a JSON body `{"text": …}`.
pub async fn predict(
    State(state): State<AppState>,
    source: Option<ConnectInfo<SocketAddr>>,
    Json(body): Json<PredictRequest>,
) -> ApiResult<PredictResponse> {
    let source = source.map(|ConnectInfo(addr)| addr);
    classify_review(&state, source, &body.text).await.map(Json)
}

/// The full prediction flow: normalize, classify, map labels, explain,
/// assemble. Only input problems surface as errors; explanation failures
/// degrade inside the explainer and never block the classification result.
pub async fn classify_review(
    state: &AppState,
    source: Option<SocketAddr>,
    text: &str,
) -> Result<PredictResponse, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Empty);
    }

    let clean_text = state.normalizer.normalize(text);
    if clean_text.trim().is_empty() {
        return Err(InputError::NothingMeaningful);
    }

    let prediction = state.model.predict(&clean_text);
    let (top_label, top_prob) = prediction.top();
    let raw_label = top_label.to_string();

    info!(
        source = ?source,
        text = %text,
        clean = %clean_text,
        label = %raw_label,
        proba = ?prediction.proba,
        "nb predict"
    );

    let sentiment = Sentiment::from_raw(RawLabel::parse(&raw_label));
    let confidence = round2(top_prob * 100.0);

    // The explainer sees the original text so the phrasing stays natural.
    let explanation = state.explainer.explain(sentiment, text).await;

    Ok(PredictResponse {
        sentiment,
        confidence,
        reason: explanation.reason,
        keywords: explanation.keywords,
        probs: Probs {
            positif: prediction.prob_for(RawLabel::Positif),
            netral: prediction.prob_for(RawLabel::Netral),
            negatif: prediction.prob_for(RawLabel::Negatif),
        },
        nb_debug: NbDebug {
            raw_label,
            classes: prediction.classes.clone(),
            proba: prediction.proba.clone(),
            clean_text,
        },
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn confidence_rounds_to_two_decimals() {
        assert_eq!(round2(87.654_321), 87.65);
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(100.0), 100.0);
    }
}
