//! Product listing endpoints and their query filters.

use ecoverde_core::types::{
    CategoryId, CreateProductRequest, Product, ProductId, ProductListResponse, ProductStatus,
    UpdateProductRequest,
};
use rust_decimal::Decimal;

use super::MessageResponse;
use crate::error::ApiError;
use crate::http::ApiClient;

/// Filter for the public product listing.
///
/// Unset fields and empty strings are omitted from the query string, so a
/// default filter yields the server's own defaults.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub search: Option<String>,
    pub category_id: Option<CategoryId>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub city: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl ProductFilter {
    fn to_query(&self) -> String {
        let mut params = Vec::new();
        push_param(&mut params, "page", self.page.map(|v| v.to_string()));
        push_param(&mut params, "per_page", self.per_page.map(|v| v.to_string()));
        push_param(&mut params, "search", self.search.clone());
        push_param(
            &mut params,
            "category_id",
            self.category_id.map(|v| v.to_string()),
        );
        push_param(&mut params, "min_price", self.min_price.map(|v| v.to_string()));
        push_param(&mut params, "max_price", self.max_price.map(|v| v.to_string()));
        push_param(&mut params, "city", self.city.clone());
        push_param(&mut params, "sort_by", self.sort_by.clone());
        push_param(&mut params, "sort_order", self.sort_order.clone());
        render_query(&params)
    }
}

/// Filter for the seller's own listings.
#[derive(Debug, Clone, Default)]
pub struct MyProductsFilter {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub status: Option<ProductStatus>,
}

impl MyProductsFilter {
    fn to_query(&self) -> String {
        let mut params = Vec::new();
        push_param(&mut params, "page", self.page.map(|v| v.to_string()));
        push_param(&mut params, "per_page", self.per_page.map(|v| v.to_string()));
        push_param(&mut params, "status", self.status.map(|v| v.to_string()));
        render_query(&params)
    }
}

fn push_param(params: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<String>) {
    if let Some(value) = value
        && !value.is_empty()
    {
        params.push((key, value));
    }
}

fn render_query(params: &[(&'static str, String)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();
    format!("?{}", encoded.join("&"))
}

impl ApiClient {
    /// `GET /products` - paginated public listing.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn list_products(
        &self,
        filter: &ProductFilter,
    ) -> Result<ProductListResponse, ApiError> {
        self.get(&format!("/products{}", filter.to_query())).await
    }

    /// `GET /products/:id` - a single listing with the embedded seller.
    ///
    /// # Errors
    ///
    /// Fails with status 404 when the product does not exist.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.get(&format!("/products/{id}")).await
    }

    /// `POST /products` - create a listing (starts in `DRAFT`).
    ///
    /// # Errors
    ///
    /// Fails with the server's validation message.
    pub async fn create_product(
        &self,
        request: &CreateProductRequest,
    ) -> Result<Product, ApiError> {
        self.post("/products", request).await
    }

    /// `PUT /products/:id` - partial update of an own listing.
    ///
    /// # Errors
    ///
    /// Fails when the listing belongs to another seller.
    pub async fn update_product(
        &self,
        id: ProductId,
        request: &UpdateProductRequest,
    ) -> Result<Product, ApiError> {
        self.put(&format!("/products/{id}"), request).await
    }

    /// `DELETE /products/:id` - soft-delete an own listing.
    ///
    /// # Errors
    ///
    /// Fails when the listing belongs to another seller.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        let _: MessageResponse = self.delete(&format!("/products/{id}")).await?;
        Ok(())
    }

    /// `GET /products/seller/my` - the seller's own listings, any status.
    ///
    /// # Errors
    ///
    /// Requires a valid session; see [`ApiError`].
    pub async fn my_products(
        &self,
        filter: &MyProductsFilter,
    ) -> Result<ProductListResponse, ApiError> {
        self.get(&format!("/products/seller/my{}", filter.to_query()))
            .await
    }
}
