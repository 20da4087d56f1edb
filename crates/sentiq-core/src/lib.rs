//! Core configuration types for the sentiq service.
//!
//! Holds the application config loaded from environment variables and the
//! errors produced while loading it. Model identifiers, device preference,
//! and tokens are carried as opaque values; interpreting them is the
//! engines' concern.

mod app_config;
mod config;

pub use app_config::{AppConfig, DevicePreference, Environment};
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
