//! Batch orchestration: a sequential fan-out of per-text assembly.
//!
//! Texts pair positionally with the classifier outputs; ordering and length
//! are preserved. Each text triggers its own entity-extraction call through
//! the provided closure; batching of entity extraction, if any, belongs to
//! the collaborator behind that closure.

use crate::assemble::{assemble, Assembly};
use crate::error::AnalysisError;
use crate::types::{EntitySpan, RawOutput};

/// Assemble results for a batch of texts.
///
/// `raws[i]` is the upstream sentiment output for `texts[i]`. Outputs that
/// arrive wrapped in a per-item list unwrap to their first element.
///
/// # Errors
///
/// Returns [`AnalysisError::LengthMismatch`] when the classifier produced a
/// different number of outputs than texts, and
/// [`AnalysisError::EmptyBatchItem`] when a wrapped item is empty. Either
/// fault fails the entire batch; there is no per-item isolation.
pub fn run_batch<F>(
    raws: &[RawOutput],
    texts: &[String],
    mut entities_for: F,
) -> Result<Vec<Assembly>, AnalysisError>
where
    F: FnMut(&str) -> Vec<EntitySpan>,
{
    if raws.len() != texts.len() {
        return Err(AnalysisError::LengthMismatch {
            texts: texts.len(),
            outputs: raws.len(),
        });
    }

    let mut results = Vec::with_capacity(texts.len());
    for (index, (text, raw)) in texts.iter().zip(raws).enumerate() {
        let classification = raw
            .first()
            .ok_or(AnalysisError::EmptyBatchItem { index })?;
        results.push(assemble(classification, entities_for(text)));
    }

    Ok(results)
}
