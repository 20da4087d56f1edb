//! Sentiment normalization and result assembly for sentiq.
//!
//! Reduces raw classifier output from any supported label scheme (binary,
//! ternary, five-star) to a canonical three-class probability distribution,
//! derives a signed sentiment score, and assembles per-text analysis records
//! with the entity spans produced by the entity recognizer.
//!
//! Everything in this crate is synchronous and side-effect-free: identical
//! inputs produce identical outputs, with no hidden state and no I/O.

pub mod assemble;
pub mod batch;
pub mod error;
pub mod normalize;
pub mod score;
pub mod types;

pub use assemble::{assemble, assemble_report, Assembly, ReportAssembly};
pub use batch::run_batch;
pub use error::AnalysisError;
pub use normalize::{normalize, scheme_for};
pub use score::derive_score;
pub use types::{
    AnalysisRecord, AnalysisReport, EntitySpan, ModelInfo, Polarity, RawClassification, RawOutput,
    ThreeClassDistribution,
};
