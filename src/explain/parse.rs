//! Tolerant extraction of the explanation object from free-form model text.
//!
//! Generative models wrap their JSON in prose or code fences more often
//! than not, so the parser scans for the first balanced `{…}` span instead
//! of trusting the whole body.

use serde::Deserialize;

use super::{Explanation, DEFAULT_REASON};

/// Fields the explainer is asked to produce. Unknown fields (such as the
/// echoed `sentiment` and `confidence`) are ignored; the primary label is
/// immutable.
#[derive(Debug, Deserialize)]
struct ExplainerVerdict {
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    keywords: Option<Vec<String>>,
}

/// Locate the first balanced `{…}` span, skipping braces inside string
/// literals. Returns `None` when the text holds no complete object.
pub fn first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse the explanation fields out of raw model output. `None` means no
/// usable JSON object was found; missing fields fall back individually, so
/// a good reason with absent keywords is still a success.
pub fn explanation_from_text(text: &str) -> Option<Explanation> {
    let span = first_json_object(text)?;
    let verdict: ExplainerVerdict = serde_json::from_str(span).ok()?;
    Some(Explanation {
        reason: verdict
            .reason
            .filter(|reason| !reason.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REASON.to_string()),
        keywords: verdict.keywords.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_object_from_code_fence() {
        let text = "Berikut hasilnya:\n```json\n{\"reason\": \"ulasan memuji\", \"keywords\": [\"bagus\"]}\n```\nSemoga membantu.";
        let explanation = explanation_from_text(text).unwrap();
        assert_eq!(explanation.reason, "ulasan memuji");
        assert_eq!(explanation.keywords, vec!["bagus"]);
    }

    #[test]
    fn braces_inside_strings_do_not_break_the_scan() {
        let text = r#"{"reason": "simbol {x} dalam teks", "keywords": []}"#;
        let explanation = explanation_from_text(text).unwrap();
        assert_eq!(explanation.reason, "simbol {x} dalam teks");
    }

    #[test]
    fn missing_keywords_fall_back_to_empty() {
        let explanation =
            explanation_from_text(r#"{"sentiment": "Positif", "reason": "jelas"}"#).unwrap();
        assert_eq!(explanation.reason, "jelas");
        assert!(explanation.keywords.is_empty());
    }

    #[test]
    fn missing_reason_falls_back_to_default() {
        let explanation =
            explanation_from_text(r#"{"keywords": ["bagus", "cepat"]}"#).unwrap();
        assert_eq!(explanation.reason, DEFAULT_REASON);
        assert_eq!(explanation.keywords, vec!["bagus", "cepat"]);

        let blank = explanation_from_text(r#"{"reason": "   "}"#).unwrap();
        assert_eq!(blank.reason, DEFAULT_REASON);
    }

    #[test]
    fn text_without_json_yields_none() {
        assert!(explanation_from_text("maaf, saya tidak bisa membantu").is_none());
        assert!(explanation_from_text("terpotong: {\"reason\": \"hil").is_none());
        assert!(first_json_object("tanpa kurung kurawal").is_none());
    }

    #[test]
    fn non_object_json_yields_none() {
        // balanced span that is not the expected shape
        assert!(explanation_from_text("{\"reason\": 42}").is_none());
    }
}
