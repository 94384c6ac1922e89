//! Fixed-vocabulary TF-IDF transform mirroring the training-time vectorizer.

use std::collections::HashMap;

use anyhow::{ensure, Result};
use ndarray::Array1;
use serde::Deserialize;

/// Pre-fitted vectorizer artifact: token-to-column indices plus smooth-idf
/// weights. The vocabulary is fixed at load time; out-of-vocabulary tokens
/// contribute nothing.
#[derive(Debug, Clone, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn vocab_size(&self) -> usize {
        self.idf.len()
    }

    /// Sanity-check the artifact after deserialization.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.idf.is_empty(), "vectorizer has an empty vocabulary");
        ensure!(
            self.vocabulary.len() == self.idf.len(),
            "vocabulary size {} does not match idf size {}",
            self.vocabulary.len(),
            self.idf.len()
        );
        for (token, &index) in &self.vocabulary {
            ensure!(
                index < self.idf.len(),
                "vocabulary index {index} for {token:?} out of range"
            );
        }
        Ok(())
    }

    /// Term counts weighted by idf, L2-normalized. Deterministic and pure.
    pub fn transform(&self, clean_text: &str) -> Array1<f64> {
        let mut features = Array1::<f64>::zeros(self.vocab_size());
        for token in clean_text.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(token) {
                features[index] += 1.0;
            }
        }
        for (index, value) in features.iter_mut().enumerate() {
            if *value > 0.0 {
                *value *= self.idf[index];
            }
        }
        let norm = features.dot(&features).sqrt();
        if norm > 0.0 {
            features.mapv_inplace(|v| v / norm);
        }
        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer() -> TfidfVectorizer {
        serde_json::from_value(serde_json::json!({
            "vocabulary": {"bagus": 0, "bantu": 1, "buruk": 2},
            "idf": [1.2, 1.5, 1.8],
        }))
        .unwrap()
    }

    #[test]
    fn known_tokens_produce_a_unit_vector() {
        let x = vectorizer().transform("bagus bantu bagus");
        let norm = x.dot(&x).sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
        assert!(x[0] > x[1], "repeated token should dominate");
        assert_eq!(x[2], 0.0);
    }

    #[test]
    fn out_of_vocabulary_tokens_contribute_nothing() {
        let x = vectorizer().transform("asing sekali");
        assert!(x.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn validate_rejects_mismatched_sizes() {
        let broken: TfidfVectorizer = serde_json::from_value(serde_json::json!({
            "vocabulary": {"bagus": 0},
            "idf": [1.0, 2.0],
        }))
        .unwrap();
        assert!(broken.validate().is_err());
    }
}
