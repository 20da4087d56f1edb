use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Where inference should prefer to run. Opaque to the analysis core;
/// engines log it and fall back to CPU when the preference cannot be met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DevicePreference {
    Cpu,
    Cuda,
}

impl std::fmt::Display for DevicePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DevicePreference::Cpu => write!(f, "cpu"),
            DevicePreference::Cuda => write!(f, "cuda"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub sentiment_model_id: String,
    pub ner_model_id: String,
    pub device: DevicePreference,
    pub hf_token: Option<String>,
    pub custom_entities_file: Option<PathBuf>,
    pub max_batch: usize,
    pub sentiment_endpoint_url: Option<String>,
    pub inference_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("sentiment_model_id", &self.sentiment_model_id)
            .field("ner_model_id", &self.ner_model_id)
            .field("device", &self.device)
            .field("hf_token", &self.hf_token.as_ref().map(|_| "[redacted]"))
            .field("custom_entities_file", &self.custom_entities_file)
            .field("max_batch", &self.max_batch)
            .field("sentiment_endpoint_url", &self.sentiment_endpoint_url)
            .field("inference_timeout_secs", &self.inference_timeout_secs)
            .finish()
    }
}
