//! User records and account-type enums.
//!
//! The server owns every field here. The client only interprets
//! [`User::is_admin`] and [`User::is_business`] for view gating; everything
//! else is carried opaquely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::UserId;

/// Account type distinguishing private sellers from businesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    #[default]
    Private,
    Business,
}

/// Account lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Pending,
    #[default]
    Active,
    Suspended,
    Banned,
}

/// Optional social media links shown on a seller profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

/// A full user record as returned by `/auth/me` and the profile endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    // Account
    pub account_type: AccountType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    #[serde(default)]
    pub has_multiple_locations: bool,

    // Italian billing data (BUSINESS accounts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiscal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sdi_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pec_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eu_vat_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_province: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_country: Option<String>,

    // Profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_photos: Option<Vec<String>>,

    pub status: UserStatus,
    pub email_verified: bool,
    pub is_admin: bool,

    // Eco metrics
    pub total_co2_saved: f64,
    pub total_water_saved: f64,
    pub eco_credits: i64,
    pub eco_level: String,

    // Rating aggregate
    pub rating_avg: f64,
    pub rating_count: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether the user holds the admin flag.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Whether the user may access business-gated views.
    ///
    /// Admins pass this check regardless of account type.
    #[must_use]
    pub fn is_business(&self) -> bool {
        self.account_type == AccountType::Business || self.is_admin
    }
}

/// Public-facing seller profile embedded in product listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub account_type: AccountType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub rating_avg: f64,
    pub rating_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Partial profile update; `None` fields are left untouched by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_multiple_locations: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiscal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdi_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pec_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eu_vat_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_country: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(account_type: AccountType, is_admin: bool) -> User {
        User {
            id: UserId::new(uuid::Uuid::new_v4()),
            email: "anna@example.it".to_string(),
            first_name: "Anna".to_string(),
            last_name: "Bianchi".to_string(),
            phone: None,
            city: Some("Firenze".to_string()),
            province: Some("FI".to_string()),
            postal_code: None,
            account_type,
            business_name: None,
            vat_number: None,
            has_multiple_locations: false,
            fiscal_code: None,
            sdi_code: None,
            pec_email: None,
            eu_vat_id: None,
            billing_address: None,
            billing_city: None,
            billing_province: None,
            billing_postal_code: None,
            billing_country: None,
            avatar_url: None,
            social_links: None,
            business_photos: None,
            status: UserStatus::Active,
            email_verified: true,
            is_admin,
            total_co2_saved: 0.0,
            total_water_saved: 0.0,
            eco_credits: 0,
            eco_level: "SEED".to_string(),
            rating_avg: 0.0,
            rating_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_account_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&AccountType::Business).unwrap(),
            "\"BUSINESS\""
        );
        let parsed: AccountType = serde_json::from_str("\"PRIVATE\"").unwrap();
        assert_eq!(parsed, AccountType::Private);
    }

    #[test]
    fn test_is_business_private_user() {
        assert!(!sample_user(AccountType::Private, false).is_business());
    }

    #[test]
    fn test_is_business_business_user() {
        assert!(sample_user(AccountType::Business, false).is_business());
    }

    #[test]
    fn test_is_business_admin_override() {
        // Admins pass business gating even on a private account
        assert!(sample_user(AccountType::Private, true).is_business());
    }

    #[test]
    fn test_user_deserializes_without_optional_fields() {
        let json = serde_json::json!({
            "id": "6e4f9db2-1f41-4be0-9a59-96f3e6f2a001",
            "email": "anna@example.it",
            "first_name": "Anna",
            "last_name": "Bianchi",
            "account_type": "PRIVATE",
            "status": "ACTIVE",
            "email_verified": false,
            "is_admin": false,
            "total_co2_saved": 1.5,
            "total_water_saved": 120.0,
            "eco_credits": 10,
            "eco_level": "SEED",
            "rating_avg": 4.5,
            "rating_count": 2,
            "created_at": "2025-03-01T10:00:00Z",
            "updated_at": "2025-03-01T10:00:00Z"
        });
        let user: User = serde_json::from_value(json).unwrap();
        assert!(user.phone.is_none());
        assert!(!user.has_multiple_locations);
        assert_eq!(user.status, UserStatus::Active);
    }

    #[test]
    fn test_update_profile_skips_none_fields() {
        let req = UpdateProfileRequest {
            city: Some("Pisa".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "city": "Pisa" }));
    }
}
