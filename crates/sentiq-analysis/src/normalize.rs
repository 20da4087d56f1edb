//! Normalization of raw classifier labels into the canonical three-class
//! distribution.
//!
//! Upstream models disagree on label vocabularies: generic `NEGATIVE` /
//! `POSITIVE` / `NEUTRAL`, CardiffNLP's `LABEL_0..LABEL_2` ternary indices,
//! and star-rating schemes that reuse the `LABEL_` prefix for 1–5 stars.
//! Because the label sets overlap, dispatch runs through [`SCHEMES`] in a
//! fixed priority order and the first matching scheme wins. Reordering the
//! table is a silent correctness break: `LABEL_0..LABEL_2` must be consumed
//! by the indexed-ternary scheme before the star scheme sees any `LABEL_`
//! prefix.

use crate::types::{RawClassification, ThreeClassDistribution};

/// One entry in the priority-ordered dispatch table.
///
/// Both functions receive the uppercased label; predicates are pure.
struct Scheme {
    name: &'static str,
    matches: fn(&str) -> bool,
    normalize: fn(&str, f64) -> ThreeClassDistribution,
}

/// Priority-ordered label schemes. First match wins; the trailing fallback
/// matches everything, so the table is total.
const SCHEMES: &[Scheme] = &[
    Scheme {
        name: "ternary",
        matches: is_ternary,
        normalize: normalize_ternary,
    },
    Scheme {
        name: "indexed-ternary",
        matches: is_indexed_ternary,
        normalize: normalize_indexed_ternary,
    },
    Scheme {
        name: "star",
        matches: is_star,
        normalize: normalize_star,
    },
    Scheme {
        name: "fallback",
        matches: always,
        normalize: normalize_unrecognized,
    },
];

/// Map a raw classification onto the canonical three-class distribution.
///
/// Total over its input domain: unrecognized labels produce the fully
/// neutral distribution rather than an error. A missing score defaults to
/// 1.0. Scores outside [0, 1] are passed through the `1 - score` arithmetic
/// unclamped; only the explicit-neutral branches floor the remaining mass
/// at zero. The non-clamping policy is deliberate: downstream consumers
/// depend on bit-identical output for out-of-range upstream scores.
#[must_use]
pub fn normalize(raw: &RawClassification) -> ThreeClassDistribution {
    let label = raw.label.to_uppercase();
    let score = raw.score_or_default();
    SCHEMES
        .iter()
        .find(|scheme| (scheme.matches)(&label))
        .map_or_else(ThreeClassDistribution::neutral_one_hot, |scheme| {
            (scheme.normalize)(&label, score)
        })
}

/// Name of the scheme that claims this raw label. Diagnostics only; the
/// mapping itself goes through [`normalize`].
#[must_use]
pub fn scheme_for(label: &str) -> &'static str {
    let upper = label.to_uppercase();
    SCHEMES
        .iter()
        .find(|scheme| (scheme.matches)(&upper))
        .map_or("fallback", |scheme| scheme.name)
}

fn always(_label: &str) -> bool {
    true
}

fn is_ternary(label: &str) -> bool {
    matches!(label, "NEGATIVE" | "POSITIVE" | "NEUTRAL")
}

fn normalize_ternary(label: &str, score: f64) -> ThreeClassDistribution {
    match label {
        "NEGATIVE" => ThreeClassDistribution::new(score, 0.0, 1.0 - score),
        "POSITIVE" => ThreeClassDistribution::new(1.0 - score, 0.0, score),
        _ => split_explicit_neutral(score),
    }
}

fn is_indexed_ternary(label: &str) -> bool {
    matches!(label, "LABEL_0" | "LABEL_1" | "LABEL_2")
}

/// CardiffNLP convention: `LABEL_0` = negative, `LABEL_1` = neutral,
/// `LABEL_2` = positive.
fn normalize_indexed_ternary(label: &str, score: f64) -> ThreeClassDistribution {
    match label {
        "LABEL_0" => ThreeClassDistribution::new(score, 0.0, 1.0 - score),
        "LABEL_1" => split_explicit_neutral(score),
        _ => ThreeClassDistribution::new(1.0 - score, 0.0, score),
    }
}

fn is_star(label: &str) -> bool {
    label.starts_with('★') || label.starts_with("STAR") || label.starts_with("LABEL_")
}

/// Star-rating collapse: indexed labels map to 1–5 stars via `index + 1`,
/// then collapse to a one-hot distribution (≤2 stars negative, 3 neutral,
/// ≥4 positive). The collapse intentionally discards score magnitude —
/// star models carry no direct polarity signal.
fn normalize_star(label: &str, _score: f64) -> ThreeClassDistribution {
    let stars = label
        .rsplit('_')
        .next()
        .and_then(|suffix| suffix.parse::<i64>().ok())
        .map_or(3, |index| {
            if (0..=4).contains(&index) {
                index + 1
            } else {
                3
            }
        });

    if stars <= 2 {
        ThreeClassDistribution::new(1.0, 0.0, 0.0)
    } else if stars == 3 {
        ThreeClassDistribution::neutral_one_hot()
    } else {
        ThreeClassDistribution::new(0.0, 0.0, 1.0)
    }
}

/// Last-resort heuristic over the raw label text. The polarity arms overlap
/// with the ternary schemes and are consumed by them during normal
/// dispatch; anything else collapses to fully neutral.
fn normalize_unrecognized(label: &str, score: f64) -> ThreeClassDistribution {
    match label {
        "NEGATIVE" | "LABEL_0" => ThreeClassDistribution::new(score, 0.0, 1.0 - score),
        "POSITIVE" | "LABEL_1" | "LABEL_2" => ThreeClassDistribution::new(1.0 - score, 0.0, score),
        _ => ThreeClassDistribution::neutral_one_hot(),
    }
}

/// An explicitly neutral prediction keeps its mass on neutral and splits
/// the remainder evenly across both ends. The remainder alone is floored
/// at zero.
fn split_explicit_neutral(score: f64) -> ThreeClassDistribution {
    let remaining = (1.0 - score).max(0.0);
    ThreeClassDistribution::new(remaining / 2.0, score, remaining / 2.0)
}
