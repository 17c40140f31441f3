//! Error taxonomy for the API client.
//!
//! Four failure families: transport errors from `reqwest`, HTTP-status
//! failures carrying the server's message, the forced session expiry, and
//! response-body parse failures. Server messages arrive already localized
//! (Italian) and are surfaced verbatim.

use thiserror::Error;

/// Fallback message when an error body carries no `error` field.
const UNKNOWN_ERROR: &str = "Errore sconosciuto";

/// Errors that can occur when talking to the ecoverde backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, timeout at the OS level).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response with the server-supplied message.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A 401 on a non-auth endpoint tore the session down.
    #[error("Sessione scaduta. Effettua nuovamente il login.")]
    SessionExpired,

    /// Response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// Build an [`ApiError::Api`] from a parsed error body, falling back to
    /// a generic message when the `error` field is absent or empty.
    #[must_use]
    pub(crate) fn from_error_body(status: u16, body: &serde_json::Value) -> Self {
        let message = body
            .get("error")
            .and_then(serde_json::Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_ERROR)
            .to_string();
        Self::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_body() {
        let body = serde_json::json!({ "error": "Credenziali non valide", "code": 1001 });
        let err = ApiError::from_error_body(401, &body);
        assert_eq!(err.to_string(), "Credenziali non valide");
        assert!(matches!(err, ApiError::Api { status: 401, .. }));
    }

    #[test]
    fn test_error_message_fallback_when_missing() {
        let body = serde_json::json!({ "detail": "something else" });
        let err = ApiError::from_error_body(500, &body);
        assert_eq!(err.to_string(), "Errore sconosciuto");
    }

    #[test]
    fn test_error_message_fallback_when_empty() {
        let body = serde_json::json!({ "error": "" });
        let err = ApiError::from_error_body(400, &body);
        assert_eq!(err.to_string(), "Errore sconosciuto");
    }

    #[test]
    fn test_session_expired_message_is_localized() {
        assert_eq!(
            ApiError::SessionExpired.to_string(),
            "Sessione scaduta. Effettua nuovamente il login."
        );
    }
}
