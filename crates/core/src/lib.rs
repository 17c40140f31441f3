//! ecoverde Core - Shared types library.
//!
//! This crate provides the data model shared by all ecoverde client
//! components:
//! - `client` - Session-aware HTTP API client and auth store
//! - `cli` - Command-line consumer of the client
//!
//! # Architecture
//!
//! The core crate contains only types and static reference data - no I/O,
//! no HTTP clients. Every record here is owned by the server; the client
//! transports it and treats it as opaque beyond a couple of derived
//! booleans used for view gating.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, enums, and the wire-level request/response types
//! - [`provinces`] - Static Italian province/region reference table

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod provinces;
pub mod types;

pub use provinces::{ITALIAN_PROVINCES, Province, provinces_by_region, regions};
pub use types::*;
