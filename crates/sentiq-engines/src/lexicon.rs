//! Built-in lexicon sentiment classifier.
//!
//! A word-weight scorer that emits raw classifications in the generic
//! ternary vocabulary (`POSITIVE` / `NEGATIVE` / `NEUTRAL`). Serves as the
//! default sentiment collaborator when no remote endpoint is configured.

use sentiq_analysis::{RawClassification, RawOutput};

/// General-purpose word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The aggregate score is clamped to
/// `[-1.0, 1.0]`.
const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("great", 0.4),
    ("good", 0.3),
    ("excellent", 0.5),
    ("amazing", 0.5),
    ("wonderful", 0.5),
    ("fantastic", 0.5),
    ("love", 0.5),
    ("loved", 0.5),
    ("best", 0.5),
    ("happy", 0.4),
    ("delighted", 0.5),
    ("recommend", 0.4),
    ("impressive", 0.4),
    ("reliable", 0.3),
    ("smooth", 0.3),
    ("helpful", 0.3),
    ("pleasant", 0.3),
    ("win", 0.4),
    ("success", 0.4),
    ("improved", 0.3),
    // Negative signals
    ("bad", -0.4),
    ("terrible", -0.6),
    ("awful", -0.6),
    ("horrible", -0.6),
    ("worst", -0.6),
    ("hate", -0.5),
    ("hated", -0.5),
    ("broken", -0.5),
    ("useless", -0.5),
    ("disappointing", -0.5),
    ("disappointed", -0.5),
    ("slow", -0.3),
    ("buggy", -0.5),
    ("crash", -0.5),
    ("failure", -0.4),
    ("failed", -0.4),
    ("problem", -0.3),
    ("poor", -0.4),
    ("angry", -0.4),
    ("refund", -0.3),
];

/// Sentiment backend backed by the word-weight lexicon.
///
/// Stateless and deterministic; one instance serves all requests.
#[derive(Debug, Default, Clone)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Classify one text into the generic ternary vocabulary.
    ///
    /// The polarity comes from the sign of the aggregate lexicon score; the
    /// confidence maps its magnitude into `[0.5, 1.0]`. Texts with no
    /// lexicon hits are `NEUTRAL` with full confidence.
    #[must_use]
    pub fn classify(&self, text: &str) -> RawClassification {
        let score = aggregate_score(text);
        if score > 0.0 {
            RawClassification::new("POSITIVE", 0.5 + score / 2.0)
        } else if score < 0.0 {
            RawClassification::new("NEGATIVE", 0.5 - score / 2.0)
        } else {
            RawClassification::new("NEUTRAL", 1.0)
        }
    }

    /// Classify a batch, one output per text in input order.
    #[must_use]
    pub fn classify_batch(&self, texts: &[String]) -> Vec<RawOutput> {
        texts
            .iter()
            .map(|text| RawOutput::Single(self.classify(text)))
            .collect()
    }
}

/// Sum matching word weights over the text, clamped to `[-1.0, 1.0]`.
///
/// Words are lowercased with surrounding non-alphabetic characters
/// stripped, so `"Great!"` matches `"great"`.
fn aggregate_score(text: &str) -> f64 {
    let mut score = 0.0_f64;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        for &(lex_word, weight) in LEXICON {
            if w == lex_word {
                score += weight;
                break;
            }
        }
    }
    score.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_neutral_with_full_confidence() {
        let raw = LexiconClassifier::new().classify("");
        assert_eq!(raw.label, "NEUTRAL");
        assert!((raw.score_or_default() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_words_are_neutral() {
        let raw = LexiconClassifier::new().classify("the quick brown fox");
        assert_eq!(raw.label, "NEUTRAL");
    }

    #[test]
    fn positive_keyword_yields_positive_label() {
        let raw = LexiconClassifier::new().classify("this release is great");
        assert_eq!(raw.label, "POSITIVE");
        let score = raw.score_or_default();
        assert!(score > 0.5 && score <= 1.0, "confidence {score}");
    }

    #[test]
    fn negative_keyword_yields_negative_label() {
        let raw = LexiconClassifier::new().classify("the update is terrible");
        assert_eq!(raw.label, "NEGATIVE");
        let score = raw.score_or_default();
        assert!(score > 0.5 && score <= 1.0, "confidence {score}");
    }

    #[test]
    fn punctuation_is_stripped_before_matching() {
        let raw = LexiconClassifier::new().classify("Great!");
        assert_eq!(raw.label, "POSITIVE");
    }

    #[test]
    fn stacked_positives_clamp_confidence_at_one() {
        let raw = LexiconClassifier::new()
            .classify("great excellent best love amazing wonderful fantastic win");
        assert!((raw.score_or_default() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn batch_preserves_order() {
        let texts: Vec<String> = vec!["terrible".into(), "great".into()];
        let outputs = LexiconClassifier::new().classify_batch(&texts);
        assert_eq!(outputs.len(), 2);
        assert_eq!(
            outputs[0].first().map(|r| r.label.as_str()),
            Some("NEGATIVE")
        );
        assert_eq!(
            outputs[1].first().map(|r| r.label.as_str()),
            Some("POSITIVE")
        );
    }
}
