//! Session-aware HTTP client.
//!
//! [`ApiClient`] is the single chokepoint for every call to the backend:
//! it owns the bearer token, prefixes every endpoint with the configured
//! base URL and `/api/v1`, and applies one response policy everywhere -
//! parse the body as JSON unconditionally, surface non-2xx statuses as
//! [`ApiError::Api`] with the server's message, and on a 401 outside the
//! `/auth/` namespace tear the session down and notify the expiry hook.
//!
//! No retries, no timeouts, no cancellation: every call is fire-once.

use std::sync::{Arc, Mutex};

use reqwest::{Method, StatusCode, header};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, TokenStore, USER_KEY};

/// Login route the expiry hook is invoked with after a forced logout.
pub const LOGIN_EXPIRED_PATH: &str = "/login?expired=1";

/// Callback invoked exactly once per forced logout, with the login route
/// the application should navigate to.
pub type SessionExpiredHook = Box<dyn Fn(&str) + Send + Sync>;

/// In-memory bearer token with one-shot lazy hydration from storage.
#[derive(Default)]
struct TokenCache {
    token: Option<SecretString>,
    /// Once set, storage is never consulted again for this client.
    hydrated: bool,
}

/// Client for the ecoverde marketplace API.
///
/// Cheap to clone; all clones share the token cache and the underlying
/// connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    api_base: String,
    store: Arc<dyn TokenStore>,
    token: Mutex<TokenCache>,
    on_session_expired: Mutex<Option<SessionExpiredHook>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_base", &self.inner.api_base)
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new API client.
    #[must_use]
    pub fn new(config: &ClientConfig, store: Arc<dyn TokenStore>) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                http: reqwest::Client::new(),
                api_base: config.api_base(),
                store,
                token: Mutex::new(TokenCache::default()),
                on_session_expired: Mutex::new(None),
            }),
        }
    }

    /// Install the hook invoked on forced logout (session expiry).
    ///
    /// The hook receives the login route (`/login?expired=1`) and is called
    /// exactly once per expired request. Replaces any previously installed
    /// hook.
    pub fn set_expiry_hook(&self, hook: impl Fn(&str) + Send + Sync + 'static) {
        *lock(&self.inner.on_session_expired) = Some(Box::new(hook));
    }

    /// The persistent store backing this client's session.
    #[must_use]
    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.inner.store)
    }

    /// Update the in-memory token and mirror its presence into storage.
    ///
    /// `None` removes the stored key. Either way the cache counts as
    /// hydrated afterwards, so storage cannot resurrect a cleared token.
    pub fn set_token(&self, token: Option<&str>) {
        {
            let mut cache = lock(&self.inner.token);
            cache.token = token.map(SecretString::from);
            cache.hydrated = true;
        }
        match token {
            Some(value) => self.inner.store.set(ACCESS_TOKEN_KEY, value),
            None => self.inner.store.remove(ACCESS_TOKEN_KEY),
        }
    }

    /// The current bearer token, lazily hydrated from storage at most once
    /// per client lifetime.
    ///
    /// External mutation of the store after the first hydration is not
    /// observed (single-writer assumption).
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        let mut cache = lock(&self.inner.token);
        if !cache.hydrated {
            cache.token = self
                .inner
                .store
                .get(ACCESS_TOKEN_KEY)
                .map(SecretString::from);
            cache.hydrated = true;
        }
        cache.token.clone()
    }

    /// Whether `endpoint` belongs to the authentication namespace, which is
    /// exempt from the forced-logout protocol.
    fn is_auth_endpoint(endpoint: &str) -> bool {
        endpoint.starts_with("/auth/")
    }

    /// Tear the session down after a 401: clear the access token (memory
    /// and storage), drop the refresh token and cached user, and notify
    /// the expiry hook once.
    fn force_logout(&self) {
        self.set_token(None);
        self.inner.store.remove(REFRESH_TOKEN_KEY);
        self.inner.store.remove(USER_KEY);
        warn!("session expired, forcing logout");
        if let Some(hook) = lock(&self.inner.on_session_expired).as_ref() {
            hook(LOGIN_EXPIRED_PATH);
        }
    }

    /// Execute a request against `endpoint` and decode the JSON response.
    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{endpoint}", self.inner.api_base);
        debug!(%method, %url, "api request");

        let mut request = self
            .inner
            .http
            .request(method, &url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = self.token() {
            request = request.bearer_auth(token.expose_secret());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        self.finish_response(endpoint, response).await
    }

    /// Submit one file as multipart form data.
    ///
    /// Bypasses the JSON content type so the multipart boundary is set by
    /// the transport, but applies the same bearer header and response
    /// policy as [`Self::request`].
    pub(crate) async fn upload<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        field: &'static str,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{endpoint}", self.inner.api_base);
        debug!(%url, field, "multipart upload");

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part(field, part);

        let mut request = self.inner.http.post(&url).multipart(form);
        if let Some(token) = self.token() {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        self.finish_response(endpoint, response).await
    }

    /// Shared response policy: forced logout on a non-auth 401, then
    /// unconditional JSON parse, then status check.
    async fn finish_response<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED && !Self::is_auth_endpoint(endpoint) {
            self.force_logout();
            return Err(ApiError::SessionExpired);
        }

        let bytes = response.bytes().await?;
        let body: serde_json::Value = serde_json::from_slice(&bytes)?;

        if !status.is_success() {
            return Err(ApiError::from_error_body(status.as_u16(), &body));
        }

        Ok(serde_json::from_value(body)?)
    }

    // Convenience wrappers used by the domain modules.

    pub(crate) async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::GET, endpoint, None).await
    }

    pub(crate) async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    pub(crate) async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, endpoint, Some(body)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::DELETE, endpoint, None).await
    }
}

/// Lock a mutex, recovering the inner value if a writer panicked.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::session::MemoryTokenStore;

    fn test_client(store: Arc<MemoryTokenStore>) -> ApiClient {
        let config = ClientConfig::new("http://127.0.0.1:1", "/tmp/unused.json").unwrap();
        ApiClient::new(&config, store)
    }

    #[test]
    fn test_set_token_mirrors_into_storage() {
        let store = Arc::new(MemoryTokenStore::new());
        let client = test_client(Arc::clone(&store));

        client.set_token(Some("tok-1"));
        assert_eq!(store.get(ACCESS_TOKEN_KEY), Some("tok-1".to_string()));

        client.set_token(None);
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
    }

    #[test]
    fn test_token_hydrates_from_storage_once() {
        let store = Arc::new(MemoryTokenStore::new());
        store.set(ACCESS_TOKEN_KEY, "persisted");
        let client = test_client(Arc::clone(&store));

        let token = client.token().unwrap();
        assert_eq!(token.expose_secret(), "persisted");

        // External storage mutation is not observed after hydration
        store.set(ACCESS_TOKEN_KEY, "mutated-behind-our-back");
        let token = client.token().unwrap();
        assert_eq!(token.expose_secret(), "persisted");
    }

    #[test]
    fn test_cleared_token_is_not_resurrected() {
        let store = Arc::new(MemoryTokenStore::new());
        store.set(ACCESS_TOKEN_KEY, "persisted");
        let client = test_client(Arc::clone(&store));

        client.set_token(None);
        assert!(client.token().is_none());
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
    }

    #[test]
    fn test_auth_namespace_detection() {
        assert!(ApiClient::is_auth_endpoint("/auth/login"));
        assert!(ApiClient::is_auth_endpoint("/auth/me"));
        assert!(!ApiClient::is_auth_endpoint("/products"));
        assert!(!ApiClient::is_auth_endpoint("/profile/locations"));
    }

    #[test]
    fn test_force_logout_clears_session_and_fires_hook_once() {
        let store = Arc::new(MemoryTokenStore::new());
        store.set(REFRESH_TOKEN_KEY, "refresh");
        store.set(USER_KEY, "{}");
        let client = test_client(Arc::clone(&store));
        client.set_token(Some("tok-1"));

        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(String::new()));
        {
            let calls = Arc::clone(&calls);
            let seen = Arc::clone(&seen);
            client.set_expiry_hook(move |path| {
                calls.fetch_add(1, Ordering::SeqCst);
                *seen.lock().unwrap() = path.to_string();
            });
        }

        client.force_logout();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*seen.lock().unwrap(), LOGIN_EXPIRED_PATH);
        assert!(client.token().is_none());
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
        assert_eq!(store.get(REFRESH_TOKEN_KEY), None);
        assert_eq!(store.get(USER_KEY), None);
    }

    #[test]
    fn test_debug_redacts_token() {
        let store = Arc::new(MemoryTokenStore::new());
        let client = test_client(store);
        client.set_token(Some("super-secret-token"));

        let debug_output = format!("{client:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super-secret-token"));
    }
}
