//! HTTP client for a remote sentiment-inference endpoint.
//!
//! Speaks the HF-inference-style protocol: POST `{"inputs": [...]}` and
//! receive, per input text, a list of `{label, score}` candidates. The
//! per-text list wrapping is preserved as [`RawOutput::Wrapped`]; the
//! orchestrator unwraps to the first (top-ranked) candidate.

use std::time::Duration;

use serde::Serialize;

use sentiq_analysis::{RawClassification, RawOutput};

use crate::error::EngineError;

/// Client for a remote sentiment classifier.
///
/// Use [`RemoteSentimentClient::new`] with the configured endpoint URL; in
/// tests, point it at a wiremock server instead.
pub struct RemoteSentimentClient {
    client: reqwest::Client,
    url: String,
    token: Option<String>,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a [&'a str],
}

impl RemoteSentimentClient {
    /// Creates a new client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        endpoint_url: &str,
        timeout_secs: u64,
        token: Option<String>,
    ) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("sentiq/0.1 (sentiment-service)")
            .build()?;

        Ok(Self {
            client,
            url: endpoint_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Classify a single text. The endpoint still wraps the result in a
    /// per-text candidate list.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`RemoteSentimentClient::classify_batch`].
    pub async fn classify(&self, text: &str) -> Result<RawOutput, EngineError> {
        let mut outputs = self.classify_batch_refs(&[text]).await?;
        outputs
            .pop()
            .ok_or_else(|| EngineError::Endpoint("endpoint returned no output".to_string()))
    }

    /// Classify a batch of texts, one output per text in input order.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Http`] on network failure.
    /// - [`EngineError::Endpoint`] on non-2xx status or when the endpoint
    ///   returns a different number of outputs than inputs.
    /// - [`EngineError::Deserialize`] when the body does not match the
    ///   nested candidate-list shape.
    pub async fn classify_batch(&self, texts: &[String]) -> Result<Vec<RawOutput>, EngineError> {
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        self.classify_batch_refs(&refs).await
    }

    async fn classify_batch_refs(&self, texts: &[&str]) -> Result<Vec<RawOutput>, EngineError> {
        let request = InferenceRequest { inputs: texts };
        let mut builder = self.client.post(&self.url).json(&request);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::Endpoint(format!(
                "endpoint returned status {status}"
            )));
        }

        let body = response.bytes().await?;
        let candidates: Vec<Vec<RawClassification>> =
            serde_json::from_slice(&body).map_err(|e| EngineError::Deserialize {
                context: format!("classify({} texts)", texts.len()),
                source: e,
            })?;

        if candidates.len() != texts.len() {
            return Err(EngineError::Endpoint(format!(
                "endpoint returned {} outputs for {} inputs",
                candidates.len(),
                texts.len()
            )));
        }

        Ok(candidates.into_iter().map(RawOutput::Wrapped).collect())
    }
}
