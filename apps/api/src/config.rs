use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default so the service starts against a local Ollama.
#[derive(Debug, Clone)]
pub struct Config {
    pub ollama_url: String,
    pub llm_model: String,
    pub llm_timeout: Duration,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process env.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            ollama_url: var("OLLAMA_URL", "http://localhost:11434"),
            llm_model: var("LLM_MODEL", "gemma2:2b"),
            llm_timeout: Duration::from_secs(
                var("LLM_TIMEOUT_SECS", "120")
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            max_upload_bytes: var("MAX_UPLOAD_BYTES", "5242880")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            port: var("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG", "info"),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.ollama_url, "http://localhost:11434");
        assert_eq!(config.llm_model, "gemma2:2b");
        assert_eq!(config.llm_timeout, Duration::from_secs(120));
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
        assert_eq!(config.port, 8000);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("OLLAMA_URL", "http://ollama:11434"),
            ("LLM_MODEL", "llama3"),
            ("LLM_TIMEOUT_SECS", "30"),
            ("PORT", "9000"),
        ])
        .unwrap();
        assert_eq!(config.ollama_url, "http://ollama:11434");
        assert_eq!(config.llm_model, "llama3");
        assert_eq!(config.llm_timeout, Duration::from_secs(30));
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = from_pairs(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
