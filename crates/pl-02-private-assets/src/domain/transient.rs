//! # Transient Payload Validator
//!
//! Pulls the asset value out of the out-of-band payload. Runs before any
//! store mutation, so a rejected request leaves the ledger untouched.

use super::entities::PRIVATE_VALUE_FIELD;
use crate::error::AssetError;
use shared_types::TransientPayload;

/// Message returned when the value field is absent.
pub const MISSING_FIELD_MESSAGE: &str =
    "The privateValue key was not specified in transient data. Please try again.";

/// Extracts and checks the `privateValue` transient field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransientValidator {
    max_value_bytes: usize,
}

impl TransientValidator {
    /// Validator accepting values up to `max_value_bytes` long.
    pub fn new(max_value_bytes: usize) -> Self {
        Self { max_value_bytes }
    }

    /// The value carried by the payload, decoded as UTF-8 text.
    ///
    /// Fields other than `privateValue` are ignored; a payload holding only
    /// other fields is treated the same as an empty one.
    pub fn extract_value(&self, payload: &TransientPayload) -> Result<String, AssetError> {
        let raw = payload
            .get(PRIVATE_VALUE_FIELD)
            .ok_or_else(|| AssetError::Validation(MISSING_FIELD_MESSAGE.to_string()))?;

        if raw.len() > self.max_value_bytes {
            return Err(AssetError::Validation(format!(
                "The {} value is {} bytes, limit is {}",
                PRIVATE_VALUE_FIELD,
                raw.len(),
                self.max_value_bytes
            )));
        }

        String::from_utf8(raw.to_vec()).map_err(|_| {
            AssetError::Validation(format!("The {} value is not valid UTF-8", PRIVATE_VALUE_FIELD))
        })
    }
}
