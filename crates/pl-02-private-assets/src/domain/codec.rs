//! # Asset Record Codec
//!
//! Canonical encoding of a `PrivateAsset`: compact JSON, one fixed field, no
//! whitespace. Commitments are computed over these bytes, so equal values
//! must always encode to identical bytes.

use super::entities::PrivateAsset;
use crate::error::AssetError;

/// Canonical bytes for `asset`.
pub fn encode(asset: &PrivateAsset) -> Result<Vec<u8>, AssetError> {
    serde_json::to_vec(asset)
        .map_err(|e| AssetError::Validation(format!("Cannot encode asset: {}", e)))
}

/// Parse stored bytes back into an asset.
pub fn decode(bytes: &[u8]) -> Result<PrivateAsset, AssetError> {
    serde_json::from_slice(bytes).map_err(|e| AssetError::Decode(e.to_string()))
}
