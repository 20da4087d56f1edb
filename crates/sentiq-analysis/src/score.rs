//! Signed score derivation from the canonical distribution.

use crate::types::ThreeClassDistribution;

/// Collapse a three-class distribution into a single signed scalar in
/// [-1, 1]: positive mass minus negative mass. Pure and total.
#[must_use]
pub fn derive_score(probs: &ThreeClassDistribution) -> f64 {
    probs.positive - probs.negative
}
