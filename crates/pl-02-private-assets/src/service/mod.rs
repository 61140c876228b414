//! Service Layer
//!
//! Orchestrates the domain logic against the partitioned store.

pub mod private_asset_service;

pub use private_asset_service::PrivateAssetService;
