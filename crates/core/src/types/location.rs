//! Seller pickup locations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{LocationId, UserId};

/// A pickup location owned by a user.
///
/// The server enforces that at most one location per user is primary.
/// `is_active` is independent of the primary flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub user_id: UserId,
    pub name: String,
    pub is_primary: bool,
    pub is_active: bool,
    pub address_street: String,
    pub address_city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_province: Option<String>,
    pub address_postal_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_instructions: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /profile/locations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CreateLocationRequest {
    pub name: String,
    pub address_street: String,
    pub address_city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_province: Option<String>,
    pub address_postal_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
}
