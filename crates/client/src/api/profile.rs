//! Profile and pickup-location endpoints.

use ecoverde_core::types::{CreateLocationRequest, Location, LocationId, UpdateProfileRequest, User};
use serde::Deserialize;

use super::DeleteResponse;
use crate::error::ApiError;
use crate::http::ApiClient;

/// Response of `GET /profile`: the user plus their pickup locations.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub user: User,
    #[serde(default)]
    pub locations: Vec<Location>,
}

/// Response of `POST /profile/avatar`.
#[derive(Debug, Clone, Deserialize)]
pub struct AvatarResponse {
    pub avatar_url: String,
}

/// Response of `POST /profile/business-photos`.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessPhotoResponse {
    pub photo_url: String,
}

impl ApiClient {
    /// `GET /profile` - the logged-in user's full profile with locations.
    ///
    /// # Errors
    ///
    /// Requires a valid session; see [`ApiError`].
    pub async fn get_profile(&self) -> Result<ProfileResponse, ApiError> {
        self.get("/profile").await
    }

    /// `PUT /profile` - partial profile update; returns the updated user.
    ///
    /// # Errors
    ///
    /// Fails with the server's validation message.
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<User, ApiError> {
        self.put("/profile", request).await
    }

    /// `GET /profile/locations` - all pickup locations of the user.
    ///
    /// The body is a bare JSON array, not a wrapper object.
    ///
    /// # Errors
    ///
    /// Requires a valid session; see [`ApiError`].
    pub async fn get_locations(&self) -> Result<Vec<Location>, ApiError> {
        self.get("/profile/locations").await
    }

    /// `POST /profile/locations` - add a pickup location.
    ///
    /// # Errors
    ///
    /// Fails with the server's validation message.
    pub async fn create_location(
        &self,
        request: &CreateLocationRequest,
    ) -> Result<Location, ApiError> {
        self.post("/profile/locations", request).await
    }

    /// `DELETE /profile/locations/:id` - remove a pickup location.
    ///
    /// The body is `{ "success": bool }`, unlike the message bodies of the
    /// other delete endpoints.
    ///
    /// # Errors
    ///
    /// Fails when the location does not exist or belongs to another user.
    pub async fn delete_location(&self, id: LocationId) -> Result<(), ApiError> {
        let _: DeleteResponse = self.delete(&format!("/profile/locations/{id}")).await?;
        Ok(())
    }

    /// `POST /profile/avatar` - upload the profile picture (field `file`).
    ///
    /// # Errors
    ///
    /// Fails when the server rejects the image (size, format).
    pub async fn upload_avatar(
        &self,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<AvatarResponse, ApiError> {
        self.upload("/profile/avatar", "file", file_name, bytes).await
    }

    /// `POST /profile/business-photos` - add a photo to the business
    /// gallery (field `file`).
    ///
    /// # Errors
    ///
    /// Fails when the server rejects the image or the account is not a
    /// business.
    pub async fn upload_business_photo(
        &self,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<BusinessPhotoResponse, ApiError> {
        self.upload("/profile/business-photos", "file", file_name, bytes)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // The backend returns the location list as a bare JSON array
    #[test]
    fn test_locations_body_is_a_bare_array() {
        let body = serde_json::json!([{
            "id": "8e2e6a2e-4f1a-4f6e-b1a7-2d3c4b5a6978",
            "user_id": "6e4f9db2-1f41-4be0-9a59-96f3e6f2a001",
            "name": "Magazzino centro",
            "is_primary": true,
            "is_active": true,
            "address_street": "Via Roma 12",
            "address_city": "Lucca",
            "address_postal_code": "55100",
            "created_at": "2025-02-10T09:00:00Z"
        }]);
        let locations: Vec<Location> = serde_json::from_value(body).unwrap();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations.first().unwrap().name, "Magazzino centro");
    }

    #[test]
    fn test_empty_locations_body_decodes() {
        let locations: Vec<Location> = serde_json::from_value(serde_json::json!([])).unwrap();
        assert!(locations.is_empty());
    }

    // Location deletion answers `{"success": true}`, not a message body
    #[test]
    fn test_delete_location_body_is_a_success_flag() {
        let body = serde_json::json!({ "success": true });
        let response: DeleteResponse = serde_json::from_value(body).unwrap();
        assert!(response.success);
    }
}
