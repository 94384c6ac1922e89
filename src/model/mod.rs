//! Pre-trained model artifacts and the classification adapter.

pub mod classifier;
pub mod labels;
pub mod vectorizer;

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{ensure, Context, Result};
use serde::de::DeserializeOwned;
use tracing::info;

use classifier::MultinomialNb;
use labels::RawLabel;
use vectorizer::TfidfVectorizer;

pub const VECTORIZER_FILE: &str = "tfidf_vectorizer.json";
pub const CLASSIFIER_FILE: &str = "naive_bayes.json";

/// Vectorizer + classifier pair loaded once at startup and shared read-only
/// across requests.
pub struct SentimentModel {
    vectorizer: TfidfVectorizer,
    classifier: MultinomialNb,
}

impl SentimentModel {
    /// Load both artifacts from `dir`. Any failure here is fatal: the
    /// process must refuse to start rather than serve degraded predictions.
    pub fn load(dir: &Path) -> Result<Self> {
        let vectorizer: TfidfVectorizer = read_json(&dir.join(VECTORIZER_FILE))?;
        vectorizer.validate()?;
        let classifier: MultinomialNb = read_json(&dir.join(CLASSIFIER_FILE))?;
        ensure!(
            classifier.n_features() == vectorizer.vocab_size(),
            "classifier expects {} features but the vectorizer provides {}",
            classifier.n_features(),
            vectorizer.vocab_size()
        );

        info!(
            classes = ?classifier.classes(),
            vocab_size = vectorizer.vocab_size(),
            "loaded model artifacts"
        );
        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Classify an already-normalized token string. Callers must not pass
    /// empty input; they report "no meaningful content" upstream instead.
    pub fn predict(&self, clean_text: &str) -> Prediction {
        let features = self.vectorizer.transform(clean_text);
        let proba = self.classifier.predict_proba(&features);
        Prediction {
            classes: self.classifier.classes().to_vec(),
            proba: proba.to_vec(),
        }
    }
}

/// Raw classifier output for one review: one probability per class, in the
/// classifier's fixed class ordering.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub classes: Vec<String>,
    pub proba: Vec<f64>,
}

impl Prediction {
    /// Arg-max class name with its probability.
    pub fn top(&self) -> (&str, f64) {
        let mut best = 0;
        for (index, value) in self.proba.iter().enumerate() {
            if *value > self.proba[best] {
                best = index;
            }
        }
        (&self.classes[best], self.proba[best])
    }

    /// Probability mass assigned to a known label; 0.0 when the classifier
    /// does not carry the class.
    pub fn prob_for(&self, label: RawLabel) -> f64 {
        self.classes
            .iter()
            .position(|class| class == label.as_str())
            .map(|index| self.proba[index])
            .unwrap_or(0.0)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("opening artifact {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing artifact {}", path.display()))
}
