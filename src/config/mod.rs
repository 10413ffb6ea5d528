//! Configuration module for the Lost & Found client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

use reqwest::Url;

use crate::errors::ClientError;

/// Default base URL of the Lost & Found REST API.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST API, without a trailing slash
    pub api_url: String,
    /// Path to the JSON file backing client-local storage
    pub storage_path: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();

        let api_url = env::var("LOSTFOUND_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_url = normalize_api_url(&api_url)?;

        let storage_path = env::var("LOSTFOUND_STORAGE_PATH")
            .unwrap_or_else(|_| "./data/local_storage.json".to_string())
            .into();

        let log_level = env::var("LOSTFOUND_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        let log_json = env::var("LOSTFOUND_LOG_JSON")
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            api_url,
            storage_path,
            log_level,
            log_json,
        })
    }
}

/// Validate an API base URL and strip any trailing slash.
pub fn normalize_api_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed)
        .map_err(|e| ClientError::Config(format!("Invalid LOSTFOUND_API_URL '{}': {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ClientError::Config(format!(
            "Unsupported LOSTFOUND_API_URL scheme '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("LOSTFOUND_API_URL");
        env::remove_var("LOSTFOUND_STORAGE_PATH");
        env::remove_var("LOSTFOUND_LOG_LEVEL");
        env::remove_var("LOSTFOUND_LOG_JSON");

        let config = Config::from_env().unwrap();

        assert_eq!(config.api_url, "http://localhost:5000/api");
        assert_eq!(config.storage_path, PathBuf::from("./data/local_storage.json"));
        assert_eq!(config.log_level, "warn");
        assert!(!config.log_json);
    }

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(
            normalize_api_url("https://lost.example.edu/api/").unwrap(),
            "https://lost.example.edu/api"
        );
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert!(matches!(
            normalize_api_url("not a url"),
            Err(ClientError::Config(_))
        ));
        assert!(matches!(
            normalize_api_url("ftp://lost.example.edu"),
            Err(ClientError::Config(_))
        ));
    }
}
