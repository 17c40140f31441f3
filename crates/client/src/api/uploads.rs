//! Product media uploads.
//!
//! Both endpoints take a single multipart part under the `image` field and
//! return the public URL of the stored file.

use ecoverde_core::types::ProductId;
use serde::Deserialize;

use crate::error::ApiError;
use crate::http::ApiClient;

/// Response of the product media upload endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

impl ApiClient {
    /// `POST /upload/product/:id/image` - attach a gallery image.
    ///
    /// # Errors
    ///
    /// Fails when the product belongs to another seller or the server
    /// rejects the image.
    pub async fn upload_product_image(
        &self,
        id: ProductId,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, ApiError> {
        self.upload(
            &format!("/upload/product/{id}/image"),
            "image",
            file_name,
            bytes,
        )
        .await
    }

    /// `POST /upload/product/:id/expiry-photo` - attach the photo proving
    /// the expiry date of the goods.
    ///
    /// # Errors
    ///
    /// Fails when the product belongs to another seller or the server
    /// rejects the image.
    pub async fn upload_expiry_photo(
        &self,
        id: ProductId,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, ApiError> {
        self.upload(
            &format!("/upload/product/{id}/expiry-photo"),
            "image",
            file_name,
            bytes,
        )
        .await
    }
}
