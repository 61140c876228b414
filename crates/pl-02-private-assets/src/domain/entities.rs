//! # Domain Entities
//!
//! The private asset record and the outcome of a commitment check.

use serde::{Deserialize, Serialize};

/// Name of the asset's only field, both in the canonical encoding and in the
/// transient payload.
pub const PRIVATE_VALUE_FIELD: &str = "privateValue";

/// An asset whose value lives only in its owner's private collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrivateAsset {
    /// The confidential value.
    #[serde(rename = "privateValue")]
    pub private_value: String,
}

impl PrivateAsset {
    /// Create a new asset.
    pub fn new(private_value: impl Into<String>) -> Self {
        Self {
            private_value: private_value.into(),
        }
    }
}

/// Result of comparing a candidate against a published commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// Candidate hashes to the published commitment.
    Match,
    /// A commitment exists and the candidate does not hash to it.
    Mismatch,
    /// No commitment was published for the key.
    NoCommitment,
}

impl Verification {
    /// `Some(matched)` when there was something to compare against.
    pub fn outcome(self) -> Option<bool> {
        match self {
            Self::Match => Some(true),
            Self::Mismatch => Some(false),
            Self::NoCommitment => None,
        }
    }
}
