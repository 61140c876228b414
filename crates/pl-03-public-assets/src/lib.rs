//! # PL-03 Public Assets
//!
//! Plain key-value contracts on the shared public partition.
//!
//! **Subsystem ID:** 3  
//! **Architecture:** Hexagonal (Ports/Adapters)
//!
//! Two families ship with the crate: `Car`, which only manufacturers may
//! create, and `Medical`, which anyone may create. Both store records as
//! `{"value":"..."}` and publish no commitments.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{AssetFamily, Car, Medical, PublicAsset, MANUFACTURER_MESSAGE};
pub use error::PublicAssetError;
pub use ports::PublicAssetApi;
pub use service::{CarContract, MedicalContract, PublicAssetContract};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
