//! ecoverde Client - Session-aware HTTP API client for the marketplace backend.
//!
//! # Architecture
//!
//! - [`ApiClient`] is the single chokepoint for every network call: it owns
//!   the bearer token, serializes/deserializes JSON, and maps every non-2xx
//!   response to an [`ApiError`]. A 401 on a non-auth endpoint tears the
//!   session down and notifies the installed expiry hook; callers never see
//!   a clean 401 outside `/auth/*`.
//! - [`AuthStore`] layers observable session state (`user`, `loading`,
//!   `initialized`) on top of the client and is the only place where API
//!   failures are converted into result values instead of propagated.
//! - [`TokenStore`] abstracts the persistent side of the session: a JSON
//!   file in real deployments, an in-memory map in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ecoverde_client::{ApiClient, AuthStore, ClientConfig, FileTokenStore};
//!
//! let config = ClientConfig::from_env()?;
//! let store = Arc::new(FileTokenStore::new(config.session_file.clone()));
//! let client = ApiClient::new(&config, store);
//!
//! let auth = AuthStore::new(client.clone());
//! auth.init().await;
//!
//! let page = client.list_products(&ProductFilter::default()).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod store;

pub use api::{DeleteResponse, MessageResponse};
pub use api::products::{MyProductsFilter, ProductFilter};
pub use api::profile::{AvatarResponse, BusinessPhotoResponse, ProfileResponse};
pub use api::uploads::UploadResponse;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use http::ApiClient;
pub use session::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use store::{AuthFailure, AuthState, AuthStore};
