//! Sentiment label vocabularies and the classifier-to-display mapping.

use std::fmt;

use serde::Serialize;

/// Label vocabulary emitted by the classifier artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawLabel {
    Negatif,
    Netral,
    Positif,
}

impl RawLabel {
    /// Parse a classifier class name; unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "negatif" => Some(Self::Negatif),
            "netral" => Some(Self::Netral),
            "positif" => Some(Self::Positif),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Negatif => "negatif",
            Self::Netral => "netral",
            Self::Positif => "positif",
        }
    }
}

/// User-facing sentiment vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sentiment {
    Positif,
    Netral,
    Negatif,
}

impl Sentiment {
    /// Total mapping from the classifier vocabulary; an unrecognized raw
    /// label must never reach the caller, so `None` maps to neutral.
    pub fn from_raw(raw: Option<RawLabel>) -> Self {
        match raw {
            Some(RawLabel::Positif) => Self::Positif,
            Some(RawLabel::Negatif) => Self::Negatif,
            Some(RawLabel::Netral) | None => Self::Netral,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positif => "Positif",
            Self::Netral => "Netral",
            Self::Negatif => "Negatif",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_round_trip() {
        for raw in [RawLabel::Negatif, RawLabel::Netral, RawLabel::Positif] {
            assert_eq!(RawLabel::parse(raw.as_str()), Some(raw));
        }
    }

    #[test]
    fn unknown_labels_default_to_neutral() {
        assert_eq!(RawLabel::parse("POSITIF"), None);
        assert_eq!(RawLabel::parse("sangat positif"), None);
        assert_eq!(Sentiment::from_raw(None), Sentiment::Netral);
    }

    #[test]
    fn display_vocabulary_is_title_cased() {
        assert_eq!(
            Sentiment::from_raw(RawLabel::parse("positif")).to_string(),
            "Positif"
        );
        assert_eq!(
            Sentiment::from_raw(RawLabel::parse("negatif")).to_string(),
            "Negatif"
        );
    }

    #[test]
    fn sentiment_serializes_as_bare_string() {
        let json = serde_json::to_string(&Sentiment::Positif).unwrap();
        assert_eq!(json, "\"Positif\"");
    }
}
