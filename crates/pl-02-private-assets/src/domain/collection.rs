//! # Collection Resolver
//!
//! Maps an organization id to the name of its implicit private collection.
//! Pure and deterministic: no I/O, same input always yields the same name.

use crate::error::AssetError;
use shared_types::{CollectionName, Partition};

/// Prefix the ledger uses for per-organization implicit collections.
pub const DEFAULT_COLLECTION_PREFIX: &str = "_implicit_org_";

/// Derives private collection names from organization ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionResolver {
    prefix: String,
}

impl Default for CollectionResolver {
    fn default() -> Self {
        Self::new(DEFAULT_COLLECTION_PREFIX)
    }
}

impl CollectionResolver {
    /// Resolver with a custom prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The configured prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Collection name for `org_id`.
    ///
    /// Organization ids must be non-empty and made of ASCII alphanumerics,
    /// `.`, `-` or `_`.
    pub fn resolve(&self, org_id: &str) -> Result<CollectionName, AssetError> {
        validate_org_id(org_id)?;
        Ok(CollectionName::new(format!("{}{}", self.prefix, org_id)))
    }

    /// Private partition for `org_id`.
    pub fn partition(&self, org_id: &str) -> Result<Partition, AssetError> {
        self.resolve(org_id).map(Partition::Private)
    }
}

fn validate_org_id(org_id: &str) -> Result<(), AssetError> {
    let well_formed = !org_id.is_empty()
        && org_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));

    if well_formed {
        Ok(())
    } else {
        Err(AssetError::InvalidOrganization(org_id.to_string()))
    }
}
