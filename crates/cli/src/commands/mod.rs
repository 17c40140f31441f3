//! Command implementations, one module per area.

use std::sync::Arc;

use ecoverde_client::{ApiClient, ApiError, AuthFailure, ClientConfig, ConfigError, FileTokenStore};
use thiserror::Error;

pub mod auth;
pub mod products;
pub mod provinces;

/// Errors surfaced to the user by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The backend rejected the request.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Login or registration failed.
    #[error("{0}")]
    Auth(#[from] AuthFailure),

    /// Output serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A command argument could not be parsed.
    #[error("Invalid {0}: {1}")]
    InvalidArgument(&'static str, String),
}

/// Build the API client from the environment, with the file-backed session
/// store and an expiry hook that tells the user to log in again.
pub fn build_client() -> Result<ApiClient, CliError> {
    let config = ClientConfig::from_env()?;
    let store = Arc::new(FileTokenStore::new(config.session_file.clone()));
    let client = ApiClient::new(&config, store);
    client.set_expiry_hook(|path| {
        tracing::warn!("Session expired, log in again ({path})");
    });
    Ok(client)
}
