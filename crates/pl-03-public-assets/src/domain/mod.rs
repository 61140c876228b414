//! Domain layer for public assets

pub mod entities;
pub mod family;

pub use entities::PublicAsset;
pub use family::{AssetFamily, Car, Medical, MANUFACTURER_MESSAGE};
