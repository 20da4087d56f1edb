//! Inference collaborators for the sentiq service.
//!
//! Builds the sentiment classifier and entity recognizer once, during an
//! explicit initialization phase, and hands them to the service as a single
//! [`Engines`] handle. The analysis core never reaches for ambient global
//! state; readiness is a property of this handle existing.

pub mod error;
pub mod lexicon;
pub mod ner;
pub mod remote;

pub use error::EngineError;
pub use lexicon::LexiconClassifier;
pub use ner::{CustomPatternLoad, PatternRecognizer};
pub use remote::RemoteSentimentClient;

use sentiq_analysis::{ModelInfo, RawOutput};
use sentiq_core::AppConfig;

/// The configured sentiment collaborator.
pub enum SentimentBackend {
    Lexicon(LexiconClassifier),
    Remote(RemoteSentimentClient),
}

impl SentimentBackend {
    /// Classify one text.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] when the remote backend fails; the lexicon
    /// backend is infallible.
    pub async fn classify(&self, text: &str) -> Result<RawOutput, EngineError> {
        match self {
            SentimentBackend::Lexicon(lexicon) => {
                Ok(RawOutput::Single(lexicon.classify(text)))
            }
            SentimentBackend::Remote(remote) => remote.classify(text).await,
        }
    }

    /// Classify a batch, one output per text in input order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] when the remote backend fails.
    pub async fn classify_batch(&self, texts: &[String]) -> Result<Vec<RawOutput>, EngineError> {
        match self {
            SentimentBackend::Lexicon(lexicon) => Ok(lexicon.classify_batch(texts)),
            SentimentBackend::Remote(remote) => remote.classify_batch(texts).await,
        }
    }
}

/// Initialized inference collaborators plus the opaque model identities
/// attached to every response.
pub struct Engines {
    pub sentiment: SentimentBackend,
    pub entities: PatternRecognizer,
    pub model: ModelInfo,
}

impl Engines {
    /// Build all collaborators from configuration.
    ///
    /// The custom-pattern load is best-effort: its outcome is logged and the
    /// recognizer degrades to the built-in patterns. The device preference
    /// and token are engine-level concerns, logged here and otherwise opaque.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] only when the remote HTTP client cannot be
    /// constructed.
    pub fn load(config: &AppConfig) -> Result<Self, EngineError> {
        tracing::info!(
            sentiment_model = %config.sentiment_model_id,
            ner_model = %config.ner_model_id,
            device = %config.device,
            "initializing inference engines"
        );
        if config.hf_token.is_some() {
            tracing::info!("upstream auth token configured");
        }

        let sentiment = match &config.sentiment_endpoint_url {
            Some(url) => {
                tracing::info!(endpoint = %url, "using remote sentiment backend");
                SentimentBackend::Remote(RemoteSentimentClient::new(
                    url,
                    config.inference_timeout_secs,
                    config.hf_token.clone(),
                )?)
            }
            None => SentimentBackend::Lexicon(LexiconClassifier::new()),
        };

        let (entities, pattern_load) =
            PatternRecognizer::from_config(config.custom_entities_file.as_deref());
        match &pattern_load {
            CustomPatternLoad::Loaded(count) => {
                tracing::info!(count = *count, "entity recognizer ready with custom patterns");
            }
            CustomPatternLoad::NotConfigured => {
                tracing::debug!("entity recognizer using builtin patterns only");
            }
            CustomPatternLoad::Absent | CustomPatternLoad::Failed(_) => {
                tracing::warn!(
                    outcome = ?pattern_load,
                    "custom patterns unavailable; entity recognizer degraded to builtins"
                );
            }
        }

        Ok(Self {
            sentiment,
            entities,
            model: ModelInfo {
                sentiment: config.sentiment_model_id.clone(),
                ner: config.ner_model_id.clone(),
            },
        })
    }
}
