use thiserror::Error;

/// Contract violations surfaced by the batch orchestrator.
///
/// A fault on any single item fails the whole batch call; there is no
/// per-item isolation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("batch length mismatch: {texts} texts but {outputs} classifier outputs")]
    LengthMismatch { texts: usize, outputs: usize },

    #[error("classifier returned an empty output list for batch item {index}")]
    EmptyBatchItem { index: usize },
}
