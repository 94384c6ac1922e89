//! Indonesian text normalization pipeline.
//!
//! The serving-time pipeline must reproduce the training-time preprocessing
//! token for token; the step order here is load-bearing.

pub mod stemmer;
pub mod stopwords;

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use stemmer::Stemmer;

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"http\S+|www\.\S+").expect("valid regex"));

/// Linguistic resources bundled once at startup and shared read-only across
/// requests: the stopword set (negation words exempt) and the stemmer.
pub struct Normalizer {
    stopwords: HashSet<&'static str>,
    stemmer: Stemmer,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            stopwords: stopwords::stopword_set(),
            stemmer: Stemmer::new(),
        }
    }

    /// Clean raw review text into the token string the classifier was
    /// fitted on:
    /// lowercase, strip URLs and emoji, keep only ASCII letters, tokenize,
    /// drop stopwords and single-letter tokens, stem, and re-join.
    ///
    /// An empty result is a valid output, not an error: it means the input
    /// carried no meaningful alphabetic content.
    pub fn normalize(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }
        let text = text.to_lowercase();
        let text = URL_PATTERN.replace_all(&text, " ");
        let text = strip_pictographs(&text);
        let text = strip_non_alpha(&text);

        let tokens: Vec<String> = text
            .split_whitespace()
            .filter(|token| token.len() > 1 && !self.stopwords.contains(*token))
            .map(|token| self.stemmer.stem(token))
            .collect();
        tokens.join(" ")
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-pass emoji removal: known pictographic blocks first, then anything
/// left in the supplementary planes.
fn strip_pictographs(text: &str) -> String {
    let first_pass: String = text
        .chars()
        .map(|c| if is_pictograph(c) { ' ' } else { c })
        .collect();
    first_pass
        .chars()
        .map(|c| if (c as u32) >= 0x1_0000 { ' ' } else { c })
        .collect()
}

fn is_pictograph(c: char) -> bool {
    matches!(
        c as u32,
        0x200D                  // zero-width joiner
            | 0x2190..=0x21FF   // arrows
            | 0x2600..=0x27BF   // misc symbols, dingbats
            | 0x2B00..=0x2BFF   // misc symbols and arrows
            | 0xFE00..=0xFE0F   // variation selectors
            | 0x1F000..=0x1FAFF // emoticons and pictographs
    )
}

/// Replace every character that is not a lowercase ASCII letter or
/// whitespace with a space; digits, punctuation, and accented letters all
/// disappear here.
fn strip_non_alpha(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_stripped() {
        let normalizer = Normalizer::new();
        assert_eq!(
            normalizer.normalize("bagus http://contoh.com/x?y=1 sekali"),
            "bagus"
        );
        assert_eq!(normalizer.normalize("lihat www.contoh.com dulu"), "lihat");
    }

    #[test]
    fn emoji_and_digits_disappear() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("bagus 👍👍 100%"), "bagus");
        assert_eq!(normalizer.normalize("kecewa ☹ berat"), "kecewa berat");
    }

    #[test]
    fn short_tokens_are_dropped() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("b c d bagus"), "bagus");
    }
}
