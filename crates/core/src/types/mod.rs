//! Core types for the ecoverde marketplace.
//!
//! Wire-faithful representations of the server's records plus type-safe
//! ID wrappers. Field names match the JSON contract exactly.

pub mod auth;
pub mod id;
pub mod location;
pub mod product;
pub mod user;

pub use auth::{AuthResponse, LoginRequest, RefreshRequest, RegisterRequest};
pub use id::*;
pub use location::{CreateLocationRequest, Location};
pub use product::{
    CreateProductRequest, ListingType, Product, ProductListResponse, ProductStatus, QuantityUnit,
    ShippingMethod, UpdateProductRequest,
};
pub use user::{AccountType, SocialLinks, UpdateProfileRequest, User, UserProfile, UserStatus};
