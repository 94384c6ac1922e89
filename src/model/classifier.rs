//! Multinomial Naive Bayes probability computation over TF-IDF features.

use anyhow::{anyhow, ensure, Result};
use ndarray::{Array1, Array2};
use serde::Deserialize;

/// Pre-trained multinomial classifier loaded from a JSON artifact: class
/// names in the classifier's fixed ordering, log priors, and per-class
/// feature log probabilities.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "NbArtifact")]
pub struct MultinomialNb {
    classes: Vec<String>,
    class_log_prior: Array1<f64>,
    feature_log_prob: Array2<f64>,
}

/// On-disk shape of the classifier artifact.
#[derive(Debug, Deserialize)]
struct NbArtifact {
    classes: Vec<String>,
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<Vec<f64>>,
}

impl TryFrom<NbArtifact> for MultinomialNb {
    type Error = anyhow::Error;

    fn try_from(artifact: NbArtifact) -> Result<Self> {
        let n_classes = artifact.classes.len();
        ensure!(n_classes > 0, "classifier artifact has no classes");
        ensure!(
            artifact.class_log_prior.len() == n_classes,
            "class_log_prior size {} does not match {} classes",
            artifact.class_log_prior.len(),
            n_classes
        );
        ensure!(
            artifact.feature_log_prob.len() == n_classes,
            "feature_log_prob has {} rows for {} classes",
            artifact.feature_log_prob.len(),
            n_classes
        );
        let n_features = artifact
            .feature_log_prob
            .first()
            .map(Vec::len)
            .unwrap_or_default();
        ensure!(n_features > 0, "feature_log_prob rows are empty");

        let flat: Vec<f64> = artifact.feature_log_prob.into_iter().flatten().collect();
        let feature_log_prob = Array2::from_shape_vec((n_classes, n_features), flat)
            .map_err(|_| anyhow!("feature_log_prob rows have uneven lengths"))?;

        Ok(Self {
            classes: artifact.classes,
            class_log_prior: Array1::from(artifact.class_log_prior),
            feature_log_prob,
        })
    }
}

impl MultinomialNb {
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn n_features(&self) -> usize {
        self.feature_log_prob.ncols()
    }

    /// Class probabilities for one feature vector: softmax over the joint
    /// log likelihoods, stabilized by subtracting the maximum.
    pub fn predict_proba(&self, features: &Array1<f64>) -> Array1<f64> {
        let jll = self.feature_log_prob.dot(features) + &self.class_log_prior;
        let max = jll.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
        let exp = jll.mapv(|v| (v - max).exp());
        let total = exp.sum();
        exp / total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> MultinomialNb {
        serde_json::from_value(serde_json::json!({
            "classes": ["negatif", "netral", "positif"],
            "class_log_prior": [-1.0986, -1.0986, -1.0986],
            "feature_log_prob": [
                [-0.5, -3.0],
                [-1.5, -1.5],
                [-3.0, -0.5],
            ],
        }))
        .unwrap()
    }

    #[test]
    fn probabilities_sum_to_one() {
        let proba = classifier().predict_proba(&Array1::from(vec![0.3, 0.7]));
        assert!((proba.sum() - 1.0).abs() < 1e-9);
        assert!(proba.iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn zero_vector_falls_back_to_priors() {
        let proba = classifier().predict_proba(&Array1::from(vec![0.0, 0.0]));
        for &p in proba.iter() {
            assert!((p - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn discriminative_feature_moves_the_argmax() {
        let nb = classifier();
        let proba = nb.predict_proba(&Array1::from(vec![0.0, 1.0]));
        let argmax = proba
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(nb.classes()[argmax], "positif");
    }

    #[test]
    fn uneven_rows_are_rejected() {
        let result: Result<MultinomialNb, _> = serde_json::from_value(serde_json::json!({
            "classes": ["negatif", "positif"],
            "class_log_prior": [-0.69, -0.69],
            "feature_log_prob": [[-0.5], [-0.5, -1.0]],
        }));
        assert!(result.is_err());
    }
}
