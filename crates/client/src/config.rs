//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ECOVERDE_API_URL` - Base URL of the backend (default: `http://localhost:8080`)
//! - `ECOVERDE_SESSION_FILE` - Path of the persisted session file
//!   (default: `.ecoverde-session.json` in the working directory)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default backend base URL for local development.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Fixed API version prefix appended to the base URL.
pub const API_PREFIX: &str = "/api/v1";

/// Default session file name when none is configured.
const DEFAULT_SESSION_FILE: &str = ".ecoverde-session.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client application configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL without the API prefix (e.g. `https://api.ecoverde.it`).
    pub base_url: String,
    /// Path of the JSON file holding the persisted session tokens.
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Build a configuration from explicit values, validating the base URL.
    ///
    /// A trailing slash on `base_url` is dropped so endpoint concatenation
    /// stays unambiguous.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is not a valid absolute URL.
    pub fn new(
        base_url: impl Into<String>,
        session_file: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let mut base_url = base_url.into();
        Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("ECOVERDE_API_URL".to_string(), e.to_string()))?;
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self {
            base_url,
            session_file: session_file.into(),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `ECOVERDE_API_URL` is set but not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_env_or_default("ECOVERDE_API_URL", DEFAULT_BASE_URL);
        let session_file = get_env_or_default("ECOVERDE_SESSION_FILE", DEFAULT_SESSION_FILE);
        Self::new(base_url, PathBuf::from(session_file))
    }

    /// Full API root: base URL plus the fixed version prefix.
    #[must_use]
    pub fn api_base(&self) -> String {
        format!("{}{API_PREFIX}", self.base_url)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_appends_prefix() {
        let config = ClientConfig::new("https://api.ecoverde.it", "/tmp/session.json").unwrap();
        assert_eq!(config.api_base(), "https://api.ecoverde.it/api/v1");
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let config = ClientConfig::new("http://localhost:8080/", "/tmp/session.json").unwrap();
        assert_eq!(config.api_base(), "http://localhost:8080/api/v1");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = ClientConfig::new("not a url", "/tmp/session.json");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }
}
