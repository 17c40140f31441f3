//! Domain methods on [`ApiClient`](crate::http::ApiClient), one module per
//! backend area. Each method is a thin wrapper: build the endpoint, delegate
//! to the shared executor, decode the typed response.

use serde::Deserialize;

pub mod auth;
pub mod products;
pub mod profile;
pub mod uploads;

/// Acknowledgement body of endpoints answering `{ "message": string }`.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Acknowledgement body of endpoints answering `{ "success": bool }`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}
