//! Product listings and their lifecycle enums.
//!
//! Pricing, lifecycle transitions, and the descending-price ("dutch
//! auction") schedule are all enforced server-side; the client transports
//! these fields verbatim.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{CategoryId, ProductId, UserId};
use super::user::UserProfile;

/// Product lifecycle status.
///
/// Lifecycle: `Draft` → `Active` → one of `Sold`, `Expired`, `Deleted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    #[default]
    Draft,
    Active,
    Sold,
    Expired,
    Deleted,
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Draft => "DRAFT",
            Self::Active => "ACTIVE",
            Self::Sold => "SOLD",
            Self::Expired => "EXPIRED",
            Self::Deleted => "DELETED",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(Self::Draft),
            "ACTIVE" => Ok(Self::Active),
            "SOLD" => Ok(Self::Sold),
            "EXPIRED" => Ok(Self::Expired),
            "DELETED" => Ok(Self::Deleted),
            _ => Err(format!("invalid product status: {s}")),
        }
    }
}

/// Whether a listing is sold or given away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingType {
    #[default]
    Sale,
    Gift,
}

/// How the buyer receives the goods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingMethod {
    #[default]
    Pickup,
    SellerShips,
    BuyerArranges,
    PlatformManaged,
    DigitalForwarders,
    /// Both pickup and shipping available.
    Both,
}

/// Unit of measurement for the listed quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuantityUnit {
    #[default]
    Piece,
    Kg,
    G,
    L,
    Ml,
    /// Free-form unit; the label travels in `quantity_unit_custom`.
    Custom,
}

/// A product listing as returned by the product endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub seller_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub listing_type: ListingType,
    pub shipping_method: ShippingMethod,
    pub shipping_cost: Decimal,
    pub quantity: i64,
    pub quantity_available: i64,
    pub quantity_unit: QuantityUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_unit_custom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_photo_url: Option<String>,

    // Dutch auction schedule (server-enforced descending price)
    pub is_dutch_auction: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dutch_start_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dutch_decrease_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dutch_decrease_hours: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dutch_min_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dutch_started_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub status: ProductStatus,
    pub view_count: i64,
    pub favorite_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<UserProfile>,
}

/// Payload for `POST /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CreateProductRequest {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_unit: Option<QuantityUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_unit_custom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_type: Option<ListingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_method: Option<ShippingMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_dutch_auction: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dutch_start_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dutch_decrease_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dutch_decrease_hours: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dutch_min_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Partial update for `PUT /products/:id`; `None` fields are untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UpdateProductRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_unit: Option<QuantityUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_unit_custom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_method: Option<ShippingMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<Decimal>,
}

/// Paginated product listing response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}
