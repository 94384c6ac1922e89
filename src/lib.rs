//! Sentiment classification service for SIREKAP application reviews.
//!
//! The pipeline runs strictly forward: raw review text is normalized by an
//! Indonesian preprocessing pipeline, classified by a pre-trained TF-IDF +
//! Multinomial Naive Bayes model loaded from artifacts at startup, and the
//! numeric result is augmented with a best-effort natural-language
//! explanation from the Gemini API.

pub mod api;
pub mod cli;
pub mod config;
pub mod explain;
pub mod logging;
pub mod model;
pub mod nlp;
