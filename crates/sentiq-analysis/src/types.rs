//! Data model shared by the normalization and assembly logic.
//!
//! All types here are created fresh per request and discarded once the
//! response is serialized; nothing is mutated after construction.

use serde::{Deserialize, Serialize};

/// Opaque output of an upstream sentiment classifier.
///
/// The label vocabulary and score semantics vary by model family; this crate
/// interprets them only through the scheme dispatch in [`crate::normalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawClassification {
    pub label: String,
    /// Classifier confidence. Absent in some model outputs; normalization
    /// defaults it to 1.0.
    #[serde(default)]
    pub score: Option<f64>,
}

impl RawClassification {
    #[must_use]
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score: Some(score),
        }
    }

    /// The confidence score, defaulting to 1.0 when the field is missing.
    #[must_use]
    pub fn score_or_default(&self) -> f64 {
        self.score.unwrap_or(1.0)
    }
}

/// One upstream result per input text.
///
/// Batched inference calls sometimes wrap each item's output in a
/// one-element list; the orchestrator unwraps to the first element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawOutput {
    Single(RawClassification),
    Wrapped(Vec<RawClassification>),
}

impl RawOutput {
    /// The classification to normalize: the value itself, or the first
    /// element of a wrapped list. `None` for an empty wrapper.
    #[must_use]
    pub fn first(&self) -> Option<&RawClassification> {
        match self {
            RawOutput::Single(raw) => Some(raw),
            RawOutput::Wrapped(raws) => raws.first(),
        }
    }
}

/// Canonical three-class probability distribution.
///
/// Invariant: the three fields sum to 1.0 (within floating-point tolerance)
/// for every distribution produced by [`crate::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreeClassDistribution {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
}

impl ThreeClassDistribution {
    #[must_use]
    pub fn new(negative: f64, neutral: f64, positive: f64) -> Self {
        Self {
            negative,
            neutral,
            positive,
        }
    }

    /// The fully-neutral distribution used as the unrecognized-label default.
    #[must_use]
    pub fn neutral_one_hot() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.negative + self.neutral + self.positive
    }

    /// Arg-max class with first-wins tie-break in the fixed order
    /// negative → neutral → positive.
    #[must_use]
    pub fn dominant(&self) -> Polarity {
        let mut best = Polarity::Negative;
        let mut best_mass = self.negative;
        if self.neutral > best_mass {
            best = Polarity::Neutral;
            best_mass = self.neutral;
        }
        if self.positive > best_mass {
            best = Polarity::Positive;
        }
        best
    }
}

/// Canonical sentiment class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Negative,
    Neutral,
    Positive,
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Negative => write!(f, "negative"),
            Polarity::Neutral => write!(f, "neutral"),
            Polarity::Positive => write!(f, "positive"),
        }
    }
}

/// A labeled substring of the input text, with character offsets.
///
/// Produced by the entity recognizer and passed through unmodified, in
/// source-text order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: String,
    pub start: usize,
    pub end: usize,
}

/// Opaque model identifiers attached to every record for traceability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub sentiment: String,
    pub ner: String,
}

/// The externally visible unit of work: one per input text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub label: Polarity,
    /// Signed sentiment score in [-1, 1].
    pub score: f64,
    pub probs: ThreeClassDistribution,
    pub entities: Vec<EntitySpan>,
    pub model: ModelInfo,
}

/// The richer analyze-endpoint shape: score rescaled to [0, 1] plus a
/// deterministic natural-language rationale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub label: Polarity,
    /// Rescaled sentiment score in [0, 1]: `(signed + 1) / 2`.
    pub score: f64,
    pub probs: ThreeClassDistribution,
    pub entities: Vec<EntitySpan>,
    pub rationale: String,
    pub model: ModelInfo,
}
