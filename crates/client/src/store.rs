//! Observable authentication state.
//!
//! [`AuthStore`] wraps an [`ApiClient`] and publishes session state over a
//! `tokio::sync::watch` channel so consumers (UI layers, CLIs) can react to
//! login, logout, and the initial session restore. It is also the only
//! layer that converts API failures into values - everything below
//! propagates errors, the store absorbs them into state transitions and
//! [`AuthFailure`] results.

use ecoverde_core::types::{AuthResponse, LoginRequest, RegisterRequest, User};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, instrument, warn};

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::session::{REFRESH_TOKEN_KEY, USER_KEY};

/// Login or registration failure with a user-presentable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct AuthFailure(pub String);

impl From<ApiError> for AuthFailure {
    fn from(err: ApiError) -> Self {
        Self(err.to_string())
    }
}

/// Snapshot of the session published by [`AuthStore`].
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    /// The logged-in user, if any.
    pub user: Option<User>,
    /// True while a login, registration, or session restore is in flight.
    pub loading: bool,
    /// True once the initial session restore has completed, successfully
    /// or not. Consumers gate routing decisions on this.
    pub initialized: bool,
}

impl AuthState {
    /// Whether a user is currently logged in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the logged-in user holds the admin flag.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    /// Whether the logged-in user may access business-gated views.
    #[must_use]
    pub fn is_business(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_business)
    }

    /// The logged-in user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

/// Session state machine layered on top of [`ApiClient`].
///
/// Clones share the same state channel.
#[derive(Clone)]
pub struct AuthStore {
    client: ApiClient,
    state: watch::Sender<AuthState>,
}

impl AuthStore {
    /// Create a store over `client`, starting logged out and uninitialized.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self { client, state }
    }

    /// Subscribe to state changes. The receiver immediately sees the
    /// current state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// The client this store drives.
    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Restore the session from persisted storage, at process start.
    ///
    /// With no stored token this only flips `initialized`. With one, the
    /// user record is re-fetched from `/auth/me`; any failure there means
    /// the token is stale and the whole session is dropped. Never errors:
    /// the outcome is the published state.
    #[instrument(skip(self))]
    pub async fn init(&self) {
        if self.client.token().is_none() {
            self.update(|s| s.initialized = true);
            return;
        }

        self.update(|s| s.loading = true);
        match self.client.me().await {
            Ok(user) => {
                debug!(email = %user.email, "session restored");
                self.update(|s| {
                    s.user = Some(user);
                    s.loading = false;
                    s.initialized = true;
                });
            }
            Err(e) => {
                warn!(error = %e, "stored session is stale, dropping it");
                self.clear_session();
                self.update(|s| {
                    s.user = None;
                    s.loading = false;
                    s.initialized = true;
                });
            }
        }
    }

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// Returns the server's failure message; the state is left logged out.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthFailure> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.update(|s| s.loading = true);
        let result = self.client.login(&request).await;
        self.finish_auth(result)
    }

    /// Register a new account and log straight into it.
    ///
    /// # Errors
    ///
    /// Returns the server's failure message; the state is left logged out.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, AuthFailure> {
        self.update(|s| s.loading = true);
        let result = self.client.register(request).await;
        self.finish_auth(result)
    }

    /// Log out locally: drop tokens and the cached user. Idempotent, never
    /// talks to the server.
    #[instrument(skip(self))]
    pub fn logout(&self) {
        self.clear_session();
        self.update(|s| {
            s.user = None;
            s.loading = false;
            s.initialized = true;
        });
    }

    /// Replace the published user record after an out-of-band update
    /// (profile edit, avatar upload) and refresh the persisted copy.
    pub fn update_user(&self, user: User) {
        if let Ok(raw) = serde_json::to_string(&user) {
            self.client.token_store().set(USER_KEY, &raw);
        }
        self.update(|s| s.user = Some(user));
    }

    fn finish_auth(&self, result: Result<AuthResponse, ApiError>) -> Result<User, AuthFailure> {
        match result {
            Ok(auth) => {
                self.persist_session(&auth);
                self.update(|s| {
                    s.user = Some(auth.user.clone());
                    s.loading = false;
                    s.initialized = true;
                });
                Ok(auth.user)
            }
            Err(e) => {
                // Only the restore path owns `initialized`; a failed login
                // says nothing about whether restore has run
                self.update(|s| s.loading = false);
                Err(e.into())
            }
        }
    }

    fn persist_session(&self, auth: &AuthResponse) {
        self.client.set_token(Some(&auth.access_token));
        let store = self.client.token_store();
        store.set(REFRESH_TOKEN_KEY, &auth.refresh_token);
        if let Ok(raw) = serde_json::to_string(&auth.user) {
            store.set(USER_KEY, &raw);
        }
    }

    fn clear_session(&self) {
        self.client.set_token(None);
        let store = self.client.token_store();
        store.remove(REFRESH_TOKEN_KEY);
        store.remove(USER_KEY);
    }

    fn update(&self, mutate: impl FnOnce(&mut AuthState)) {
        self.state.send_modify(mutate);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::ClientConfig;
    use crate::session::{ACCESS_TOKEN_KEY, MemoryTokenStore, TokenStore};

    /// Client pointed at a port nothing listens on, so every network call
    /// fails with a transport error.
    fn offline_store(tokens: Arc<MemoryTokenStore>) -> AuthStore {
        let config = ClientConfig::new("http://127.0.0.1:1", "/tmp/unused.json").unwrap();
        AuthStore::new(ApiClient::new(&config, tokens))
    }

    #[tokio::test]
    async fn test_init_without_token_only_flips_initialized() {
        let store = offline_store(Arc::new(MemoryTokenStore::new()));
        assert!(!store.state().initialized);

        store.init().await;

        let state = store.state();
        assert!(state.initialized);
        assert!(!state.loading);
        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn test_init_drops_stale_session_on_failure() {
        let tokens = Arc::new(MemoryTokenStore::new());
        tokens.set(ACCESS_TOKEN_KEY, "stale");
        tokens.set(REFRESH_TOKEN_KEY, "stale-refresh");
        tokens.set(USER_KEY, "{}");
        let store = offline_store(Arc::clone(&tokens));

        store.init().await;

        let state = store.state();
        assert!(state.initialized);
        assert!(!state.loading);
        assert!(!state.is_authenticated());
        assert_eq!(tokens.get(ACCESS_TOKEN_KEY), None);
        assert_eq!(tokens.get(REFRESH_TOKEN_KEY), None);
        assert_eq!(tokens.get(USER_KEY), None);
    }

    #[tokio::test]
    async fn test_failed_login_resets_loading_and_stays_logged_out() {
        let store = offline_store(Arc::new(MemoryTokenStore::new()));

        let result = store.login("anna@example.it", "pw").await;

        assert!(result.is_err());
        let state = store.state();
        assert!(!state.loading);
        assert!(!state.is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_login_does_not_touch_initialized() {
        let store = offline_store(Arc::new(MemoryTokenStore::new()));

        // Before restore has run, a failed login must not report it done
        let _ = store.login("anna@example.it", "pw").await;
        assert!(!store.state().initialized);

        // And after restore, a failed login must not un-initialize
        store.init().await;
        let _ = store.login("anna@example.it", "pw").await;
        assert!(store.state().initialized);
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let tokens = Arc::new(MemoryTokenStore::new());
        tokens.set(ACCESS_TOKEN_KEY, "tok");
        tokens.set(REFRESH_TOKEN_KEY, "refresh");
        tokens.set(USER_KEY, "{}");
        let store = offline_store(Arc::clone(&tokens));

        store.logout();
        store.logout();

        assert!(!store.state().is_authenticated());
        assert_eq!(tokens.get(ACCESS_TOKEN_KEY), None);
        assert_eq!(tokens.get(REFRESH_TOKEN_KEY), None);
        assert_eq!(tokens.get(USER_KEY), None);
    }

    #[tokio::test]
    async fn test_subscribers_observe_transitions() {
        let store = offline_store(Arc::new(MemoryTokenStore::new()));
        let mut rx = store.subscribe();
        assert!(!rx.borrow().initialized);

        store.init().await;

        rx.changed().await.unwrap();
        assert!(rx.borrow().initialized);
    }

    #[test]
    fn test_predicates_on_empty_state() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(!state.is_admin());
        assert!(!state.is_business());
    }
}
