use crate::app_config::{AppConfig, DevicePreference, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let non_empty = |value: String| -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    };

    let env = parse_environment(&or_default("SENTIQ_ENV", "development"));
    let bind_addr = parse_addr("SENTIQ_BIND_ADDR", "0.0.0.0:8000")?;
    let log_level = or_default("SENTIQ_LOG_LEVEL", "info");

    let sentiment_model_id = or_default(
        "SENTIMENT_MODEL_ID",
        "cardiffnlp/twitter-roberta-base-sentiment-latest",
    );
    let ner_model_id = or_default("NER_MODEL_ID", "builtin-patterns");
    let device = parse_device(&or_default("INFERENCE_DEVICE", "cpu"));

    let hf_token = lookup("HF_TOKEN").ok().and_then(non_empty);
    let custom_entities_file = lookup("CUSTOM_ENTITIES_FILE")
        .ok()
        .and_then(non_empty)
        .map(PathBuf::from);
    let sentiment_endpoint_url = lookup("SENTIMENT_ENDPOINT_URL").ok().and_then(non_empty);

    let max_batch = parse_usize("MAX_BATCH", "64")?;
    let inference_timeout_secs = parse_u64("SENTIQ_INFERENCE_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        sentiment_model_id,
        ner_model_id,
        device,
        hf_token,
        custom_entities_file,
        max_batch,
        sentiment_endpoint_url,
        inference_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

/// Parse a device preference string.
///
/// Only `"cuda"` (case-insensitive) selects CUDA; anything else falls back
/// to CPU rather than rejecting.
fn parse_device(s: &str) -> DevicePreference {
    if s.eq_ignore_ascii_case("cuda") {
        DevicePreference::Cuda
    } else {
        DevicePreference::Cpu
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn parse_device_cuda_case_insensitive() {
        assert_eq!(parse_device("CUDA"), DevicePreference::Cuda);
    }

    #[test]
    fn parse_device_unknown_falls_back_to_cpu() {
        assert_eq!(parse_device("tpu"), DevicePreference::Cpu);
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("all vars have defaults");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(
            cfg.sentiment_model_id,
            "cardiffnlp/twitter-roberta-base-sentiment-latest"
        );
        assert_eq!(cfg.ner_model_id, "builtin-patterns");
        assert_eq!(cfg.device, DevicePreference::Cpu);
        assert!(cfg.hf_token.is_none());
        assert!(cfg.custom_entities_file.is_none());
        assert!(cfg.sentiment_endpoint_url.is_none());
        assert_eq!(cfg.max_batch, 64);
        assert_eq!(cfg.inference_timeout_secs, 30);
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SENTIQ_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SENTIQ_BIND_ADDR"),
            "expected InvalidEnvVar(SENTIQ_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_max_batch_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("MAX_BATCH", "16");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.max_batch, 16);
    }

    #[test]
    fn build_app_config_max_batch_invalid() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("MAX_BATCH", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MAX_BATCH"),
            "expected InvalidEnvVar(MAX_BATCH), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_blank_optional_vars_are_ignored() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("HF_TOKEN", "   ");
        map.insert("CUSTOM_ENTITIES_FILE", "");
        map.insert("SENTIMENT_ENDPOINT_URL", "  ");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.hf_token.is_none());
        assert!(cfg.custom_entities_file.is_none());
        assert!(cfg.sentiment_endpoint_url.is_none());
    }

    #[test]
    fn build_app_config_reads_model_identifiers() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SENTIMENT_MODEL_ID", "nlptown/bert-base-multilingual-uncased-sentiment");
        map.insert("NER_MODEL_ID", "custom-patterns-v2");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(
            cfg.sentiment_model_id,
            "nlptown/bert-base-multilingual-uncased-sentiment"
        );
        assert_eq!(cfg.ner_model_id, "custom-patterns-v2");
    }

    #[test]
    fn debug_redacts_hf_token() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("HF_TOKEN", "hf_secret_token");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let debug = format!("{cfg:?}");
        assert!(!debug.contains("hf_secret_token"), "token leaked: {debug}");
        assert!(debug.contains("[redacted]"));
    }
}
