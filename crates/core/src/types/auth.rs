//! Authentication request and response types.

use serde::{Deserialize, Serialize};

use super::user::{AccountType, User};

/// Payload for `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub account_type: AccountType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_multiple_locations: Option<bool>,
    // Billing info (BUSINESS accounts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiscal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdi_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pec_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eu_vat_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_country: Option<String>,
    // Location
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_street: Option<String>,
}

/// Payload for `POST /auth/refresh`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Response from login, register, and refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_body() {
        let req = LoginRequest {
            email: "anna@example.it".to_string(),
            password: "segretissima".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "email": "anna@example.it", "password": "segretissima" })
        );
    }

    #[test]
    fn test_register_request_minimal_body() {
        let req = RegisterRequest {
            email: "anna@example.it".to_string(),
            password: "segretissima".to_string(),
            first_name: "Anna".to_string(),
            last_name: "Bianchi".to_string(),
            account_type: AccountType::Private,
            city: "Firenze".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "anna@example.it",
                "password": "segretissima",
                "first_name": "Anna",
                "last_name": "Bianchi",
                "account_type": "PRIVATE",
                "city": "Firenze"
            })
        );
    }
}
