//! Persistent session storage.
//!
//! The backend session is two opaque tokens persisted under fixed keys,
//! plus a cached user record written by the auth store. [`TokenStore`]
//! abstracts where they live: a JSON file for real deployments
//! ([`FileTokenStore`]), an in-memory map for tests ([`MemoryTokenStore`]).
//!
//! Storage operations are deliberately infallible at the API level: a
//! failed write is logged and the in-memory view stays authoritative for
//! the rest of the process, mirroring how the client treats persistence as
//! best-effort alongside its in-memory token cache.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Storage key of the bearer access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key of the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// Storage key of the cached user record.
pub const USER_KEY: &str = "user";

/// Key-value store for persisted session state.
pub trait TokenStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);
    /// Remove `key` and its value if present.
    fn remove(&self, key: &str);
}

/// File-backed token store persisting a flat JSON object.
///
/// The file is read once at construction; afterwards the in-memory map is
/// authoritative and every mutation is written through. External writers
/// are not detected (single-writer assumption).
pub struct FileTokenStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileTokenStore {
    /// Open a store backed by `path`, loading existing entries if the file
    /// exists. A corrupt file is treated as empty.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let entries = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str::<HashMap<String, String>>(&raw).ok())
            .unwrap_or_else(|| {
                tracing::debug!(path = %path.display(), "starting with empty session store");
                HashMap::new()
            });
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            tracing::warn!(path = %self.path.display(), error = %e, "cannot create session directory");
            return;
        }
        match serde_json::to_string_pretty(entries) {
            Ok(raw) => {
                if let Err(e) = std::fs::write(&self.path, raw) {
                    tracing::warn!(path = %self.path.display(), error = %e, "cannot persist session");
                }
            }
            Err(e) => tracing::warn!(error = %e, "cannot serialize session"),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock only means another thread panicked mid-write;
        // the map itself is still a valid snapshot.
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.lock();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.lock();
        if entries.remove(key).is_some() {
            self.persist(&entries);
        }
    }
}

/// In-memory token store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_session_file() -> PathBuf {
        std::env::temp_dir().join(format!("ecoverde-session-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
        store.set(ACCESS_TOKEN_KEY, "tok-1");
        assert_eq!(store.get(ACCESS_TOKEN_KEY), Some("tok-1".to_string()));
        store.remove(ACCESS_TOKEN_KEY);
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);
    }

    #[test]
    fn test_file_store_roundtrip() {
        let path = temp_session_file();
        let store = FileTokenStore::new(path.clone());
        store.set(ACCESS_TOKEN_KEY, "tok-1");
        store.set(REFRESH_TOKEN_KEY, "tok-2");

        // A fresh store over the same file sees the persisted entries
        let reopened = FileTokenStore::new(path.clone());
        assert_eq!(reopened.get(ACCESS_TOKEN_KEY), Some("tok-1".to_string()));
        assert_eq!(reopened.get(REFRESH_TOKEN_KEY), Some("tok-2".to_string()));

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_file_store_remove_persists() {
        let path = temp_session_file();
        let store = FileTokenStore::new(path.clone());
        store.set(ACCESS_TOKEN_KEY, "tok-1");
        store.remove(ACCESS_TOKEN_KEY);

        let reopened = FileTokenStore::new(path.clone());
        assert_eq!(reopened.get(ACCESS_TOKEN_KEY), None);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_file_store_tolerates_corrupt_file() {
        let path = temp_session_file();
        std::fs::write(&path, "not json at all").unwrap();
        let store = FileTokenStore::new(path.clone());
        assert_eq!(store.get(ACCESS_TOKEN_KEY), None);

        std::fs::remove_file(path).unwrap();
    }
}
