//! Per-text result assembly.
//!
//! Combines a normalized sentiment distribution with the entity spans
//! produced independently by the entity recognizer. Side-effect-free;
//! entity spans pass through verbatim in their original source-text order.

use crate::normalize::normalize;
use crate::score::derive_score;
use crate::types::{
    AnalysisRecord, AnalysisReport, EntitySpan, ModelInfo, Polarity, RawClassification,
    ThreeClassDistribution,
};

/// Maximum number of entity texts quoted in an analyze rationale.
const RATIONALE_ENTITY_LIMIT: usize = 3;

/// Assembled sentiment for one text, before model identity is attached.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub label: Polarity,
    /// Signed score in [-1, 1].
    pub score: f64,
    pub probs: ThreeClassDistribution,
    pub entities: Vec<EntitySpan>,
}

impl Assembly {
    #[must_use]
    pub fn into_record(self, model: ModelInfo) -> AnalysisRecord {
        AnalysisRecord {
            label: self.label,
            score: self.score,
            probs: self.probs,
            entities: self.entities,
            model,
        }
    }
}

/// Analyze-mode assembly: rescaled score plus rationale.
#[derive(Debug, Clone)]
pub struct ReportAssembly {
    pub label: Polarity,
    /// Rescaled score in [0, 1].
    pub score: f64,
    pub probs: ThreeClassDistribution,
    pub entities: Vec<EntitySpan>,
    pub rationale: String,
}

impl ReportAssembly {
    #[must_use]
    pub fn into_report(self, model: ModelInfo) -> AnalysisReport {
        AnalysisReport {
            label: self.label,
            score: self.score,
            probs: self.probs,
            entities: self.entities,
            rationale: self.rationale,
            model,
        }
    }
}

/// Assemble the standard scoring result for one text.
#[must_use]
pub fn assemble(raw: &RawClassification, entities: Vec<EntitySpan>) -> Assembly {
    let probs = normalize(raw);
    Assembly {
        label: probs.dominant(),
        score: derive_score(&probs),
        probs,
        entities,
    }
}

/// Assemble the richer analyze result: the signed score rescaled into
/// [0, 1] via `(score + 1) / 2`, plus a deterministic rationale string.
#[must_use]
pub fn assemble_report(raw: &RawClassification, entities: Vec<EntitySpan>) -> ReportAssembly {
    let assembly = assemble(raw, entities);
    let score_01 = (assembly.score + 1.0) / 2.0;
    let rationale = build_rationale(assembly.label, score_01, &assembly.entities);
    ReportAssembly {
        label: assembly.label,
        score: score_01,
        probs: assembly.probs,
        entities: assembly.entities,
        rationale,
    }
}

/// Deterministic rationale template. Framing thresholds operate on the
/// rescaled score: above 0.7 positive, below 0.3 negative, else neutral.
fn build_rationale(label: Polarity, score_01: f64, entities: &[EntitySpan]) -> String {
    let framing = if score_01 > 0.7 {
        "clearly positive"
    } else if score_01 < 0.3 {
        "clearly negative"
    } else {
        "broadly neutral"
    };

    let mut rationale = format!(
        "The text reads as {framing} (label: {label}); {} entities detected.",
        entities.len()
    );

    if !entities.is_empty() {
        let names: Vec<&str> = entities
            .iter()
            .take(RATIONALE_ENTITY_LIMIT)
            .map(|e| e.text.as_str())
            .collect();
        rationale.push_str(&format!(" Key entities: {}.", names.join(", ")));
    }

    rationale
}
