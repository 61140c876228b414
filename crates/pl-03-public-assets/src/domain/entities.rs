//! Public asset record and its ledger encoding.

use crate::error::PublicAssetError;
use serde::{Deserialize, Serialize};

/// A record on the public partition, stored as `{"value":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicAsset {
    /// Free-form value.
    pub value: String,
}

impl PublicAsset {
    /// Create a record holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Ledger bytes for this record.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PublicAssetError> {
        serde_json::to_vec(self).map_err(|e| PublicAssetError::Decode(e.to_string()))
    }

    /// Parse ledger bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PublicAssetError> {
        serde_json::from_slice(bytes).map_err(|e| PublicAssetError::Decode(e.to_string()))
    }
}
