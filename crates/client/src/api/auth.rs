//! Authentication endpoints.
//!
//! These methods are stateless wrappers: they return the server's response
//! and never touch the token cache. Installing or clearing tokens is the
//! job of [`AuthStore`](crate::store::AuthStore).

use ecoverde_core::types::{AuthResponse, LoginRequest, RefreshRequest, RegisterRequest, User};

use crate::error::ApiError;
use crate::http::ApiClient;

impl ApiClient {
    /// `POST /auth/register` - create an account and receive a session.
    ///
    /// # Errors
    ///
    /// Fails with the server's validation message (duplicate email, weak
    /// password, missing business fields).
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/register", request).await
    }

    /// `POST /auth/login` - exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// A wrong email or password surfaces as [`ApiError::Api`] with the
    /// server's message, never as a forced logout.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/login", request).await
    }

    /// `GET /auth/me` - the user record behind the current bearer token.
    ///
    /// # Errors
    ///
    /// A stale token yields [`ApiError::Api`] with status 401; the `/auth/`
    /// namespace is exempt from the forced-logout protocol.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get("/auth/me").await
    }

    /// `POST /auth/refresh` - exchange a refresh token for a new session.
    ///
    /// Exposed for callers that manage rotation themselves; nothing in this
    /// crate invokes it.
    ///
    /// # Errors
    ///
    /// Fails with the server's message when the refresh token is invalid.
    pub async fn refresh(&self, request: &RefreshRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/refresh", request).await
    }
}
