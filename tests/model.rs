use std::path::PathBuf;

use sirekap_sentiment::model::{
    labels::RawLabel, SentimentModel, CLASSIFIER_FILE, VECTORIZER_FILE,
};

fn artifacts_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("artifacts")
}

#[test]
fn committed_artifacts_load() {
    let model = SentimentModel::load(&artifacts_dir()).expect("artifacts load");
    let prediction = model.predict("aplikasi bagus bantu");
    assert_eq!(prediction.classes, vec!["negatif", "netral", "positif"]);
}

#[test]
fn distribution_covers_all_labels_and_sums_to_one() {
    let model = SentimentModel::load(&artifacts_dir()).unwrap();
    for text in ["aplikasi bagus bantu", "tidak bantu susah", "aplikasi biasa"] {
        let prediction = model.predict(text);
        let total: f64 = prediction.proba.iter().sum();
        assert!((total - 1.0).abs() < 1e-6, "probabilities for {text:?} sum to {total}");
        let mapped = prediction.prob_for(RawLabel::Negatif)
            + prediction.prob_for(RawLabel::Netral)
            + prediction.prob_for(RawLabel::Positif);
        assert!((mapped - 1.0).abs() < 1e-6);
    }
}

#[test]
fn classification_is_deterministic() {
    let model = SentimentModel::load(&artifacts_dir()).unwrap();
    let first = model.predict("aplikasi sering error gagal terus");
    let second = model.predict("aplikasi sering error gagal terus");
    assert_eq!(first.proba, second.proba);
    assert_eq!(first.top().0, second.top().0);
}

#[test]
fn trained_polarity_matches_expectations() {
    let model = SentimentModel::load(&artifacts_dir()).unwrap();
    assert_eq!(model.predict("aplikasi bagus bantu").top().0, "positif");
    assert_eq!(model.predict("aplikasi sering error gagal terus").top().0, "negatif");
    assert_eq!(model.predict("aplikasi biasa").top().0, "netral");
}

#[test]
fn out_of_vocabulary_text_falls_back_to_priors() {
    let model = SentimentModel::load(&artifacts_dir()).unwrap();
    let prediction = model.predict("zzz asing");
    let total: f64 = prediction.proba.iter().sum();
    assert!((total - 1.0).abs() < 1e-6);
    // nothing informative in the text, so no class may dominate
    assert!(prediction.top().1 < 0.5);
}

#[test]
fn missing_artifacts_are_fatal() {
    let dir = tempfile::tempdir().unwrap();
    assert!(SentimentModel::load(dir.path()).is_err());
}

#[test]
fn corrupt_artifacts_are_fatal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(VECTORIZER_FILE), "{not json").unwrap();
    std::fs::write(dir.path().join(CLASSIFIER_FILE), "{}").unwrap();
    assert!(SentimentModel::load(dir.path()).is_err());
}

#[test]
fn dimension_mismatch_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(VECTORIZER_FILE),
        serde_json::json!({
            "vocabulary": {"bagus": 0, "buruk": 1},
            "idf": [1.0, 1.0],
        })
        .to_string(),
    )
    .unwrap();
    std::fs::write(
        dir.path().join(CLASSIFIER_FILE),
        serde_json::json!({
            "classes": ["negatif", "netral", "positif"],
            "class_log_prior": [-1.0986, -1.0986, -1.0986],
            "feature_log_prob": [[-1.0], [-1.0], [-1.0]],
        })
        .to_string(),
    )
    .unwrap();
    assert!(SentimentModel::load(dir.path()).is_err());
}
