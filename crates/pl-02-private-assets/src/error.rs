//! Error types for the Private Assets subsystem

use pl_01_ledger_store::StoreError;
use shared_types::RequiredAttribute;
use thiserror::Error;

/// Errors that can occur in the Private Assets subsystem
#[derive(Debug, Error)]
pub enum AssetError {
    /// Transient payload missing, unreadable, or too large.
    #[error("{0}")]
    Validation(String),

    /// Key already holds a value in the caller's collection.
    #[error("The asset my private asset {key} already exists")]
    AlreadyExists {
        /// Requested key
        key: String,
    },

    /// Key holds no value in the caller's collection.
    #[error("The asset my private asset {key} does not exist")]
    NotFound {
        /// Requested key
        key: String,
    },

    /// Nothing published for the key, so there is nothing to verify against.
    #[error("No private data hash with the Key: {key}")]
    CommitmentNotFound {
        /// Requested key
        key: String,
    },

    /// Stored bytes are not a valid asset record.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Organization id cannot name a collection.
    #[error("Invalid organization id: {0:?}")]
    InvalidOrganization(String),

    /// Caller lacks the configured write requirement.
    #[error("Unauthorized: caller lacks attribute {attribute}")]
    Unauthorized {
        /// Attribute the caller was missing
        attribute: RequiredAttribute,
    },

    /// Invalid service configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Backend failure.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl AssetError {
    /// True for both the missing-asset and missing-commitment cases.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::CommitmentNotFound { .. })
    }
}
