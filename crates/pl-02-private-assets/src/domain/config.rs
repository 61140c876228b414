//! Private asset service configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use pl_02_private_assets::domain::PrivateAssetConfig;
//! use shared_types::RequiredAttribute;
//!
//! let config = PrivateAssetConfig::default()
//!     .with_collection_prefix("_implicit_org_")
//!     .with_write_requirement(RequiredAttribute::new("role", "writer"));
//! config.validate()?;
//! ```

use super::collection::DEFAULT_COLLECTION_PREFIX;
use crate::error::AssetError;
use serde::{Deserialize, Serialize};
use shared_types::RequiredAttribute;
use std::env;

/// Default upper bound on a transient value.
pub const DEFAULT_MAX_VALUE_BYTES: usize = 64 * 1024;

/// Private asset service configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrivateAssetConfig {
    /// Prefix of per-organization collection names
    pub collection_prefix: String,
    /// Largest accepted `privateValue`, in bytes
    pub max_value_bytes: usize,
    /// Attribute a caller needs for create/update/delete (none = open)
    pub write_requirement: Option<RequiredAttribute>,
}

impl Default for PrivateAssetConfig {
    fn default() -> Self {
        Self {
            collection_prefix: DEFAULT_COLLECTION_PREFIX.to_string(),
            max_value_bytes: DEFAULT_MAX_VALUE_BYTES,
            write_requirement: None,
        }
    }
}

impl PrivateAssetConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PL_COLLECTION_PREFIX`: collection prefix (default: `_implicit_org_`)
    /// - `PL_MAX_VALUE_BYTES`: value size limit (default: 65536)
    /// - `PL_WRITE_REQUIREMENT`: `name=value` attribute required for writes
    pub fn from_env() -> Result<Self, AssetError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AssetError> {
        let defaults = Self::default();

        let max_value_bytes = match lookup("PL_MAX_VALUE_BYTES") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                AssetError::Config(format!("PL_MAX_VALUE_BYTES is not a number: {:?}", raw))
            })?,
            None => defaults.max_value_bytes,
        };

        let write_requirement = lookup("PL_WRITE_REQUIREMENT")
            .map(|raw| parse_requirement(&raw))
            .transpose()?;

        let config = Self {
            collection_prefix: lookup("PL_COLLECTION_PREFIX")
                .unwrap_or(defaults.collection_prefix),
            max_value_bytes,
            write_requirement,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), AssetError> {
        if self.collection_prefix.is_empty() {
            return Err(AssetError::Config(
                "collection_prefix cannot be empty".to_string(),
            ));
        }

        if self.max_value_bytes == 0 {
            return Err(AssetError::Config(
                "max_value_bytes cannot be 0".to_string(),
            ));
        }

        if let Some(requirement) = &self.write_requirement {
            if requirement.name.is_empty() {
                return Err(AssetError::Config(
                    "write_requirement name cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Builder-style method to set the collection prefix
    pub fn with_collection_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.collection_prefix = prefix.into();
        self
    }

    /// Builder-style method to set the value size limit
    pub fn with_max_value_bytes(mut self, max: usize) -> Self {
        self.max_value_bytes = max;
        self
    }

    /// Builder-style method to require an attribute for writes
    pub fn with_write_requirement(mut self, requirement: RequiredAttribute) -> Self {
        self.write_requirement = Some(requirement);
        self
    }
}

/// Parse `name=value` into a requirement.
pub fn parse_requirement(raw: &str) -> Result<RequiredAttribute, AssetError> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok(RequiredAttribute::new(name.trim(), value.trim()))
        }
        _ => Err(AssetError::Config(format!(
            "expected name=value attribute, got {:?}",
            raw
        ))),
    }
}
