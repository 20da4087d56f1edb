use thiserror::Error;

/// Errors produced while building or invoking the inference collaborators.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote inference endpoint returned a non-success status or a
    /// payload violating its contract.
    #[error("inference endpoint error: {0}")]
    Endpoint(String),

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
