//! Error types for the Public Assets subsystem

use pl_01_ledger_store::StoreError;
use thiserror::Error;

/// Errors that can occur in the Public Assets subsystem
#[derive(Debug, Error)]
pub enum PublicAssetError {
    /// Caller lacks the family's create requirement.
    #[error("{0}")]
    Unauthorized(String),

    /// Key already holds a value.
    #[error("The {family} {key} already exists")]
    AlreadyExists {
        /// Asset family noun
        family: &'static str,
        /// Requested key
        key: String,
    },

    /// Key holds no value.
    #[error("The {family} {key} does not exist")]
    NotFound {
        /// Asset family noun
        family: &'static str,
        /// Requested key
        key: String,
    },

    /// Record could not be encoded or decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Backend failure.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
