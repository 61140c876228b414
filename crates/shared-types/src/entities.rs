//! # Core Domain Entities
//!
//! Caller identity, partition naming and the per-transaction context that every
//! contract operation receives.
//!
//! ## Clusters
//!
//! - **Identity**: `Identity`, `OrgId`
//! - **Storage**: `CollectionName`, `Partition`
//! - **Invocation**: `TxContext`

use crate::transient::TransientPayload;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// Organization (membership service provider) identifier, e.g. `Org1MSP`.
pub type OrgId = String;

/// The identity that submitted a transaction.
///
/// Attributes are the enrollment attributes carried by the caller's
/// certificate (`manufacturer=true` and the like). Certificate parsing is
/// done upstream; contracts only ever see the decoded form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Identity {
    /// Organization the caller is enrolled with.
    pub msp_id: OrgId,
    /// Enrollment attributes.
    pub attributes: BTreeMap<String, String>,
}

impl Identity {
    /// Identity with no attributes.
    pub fn new(msp_id: impl Into<OrgId>) -> Self {
        Self {
            msp_id: msp_id.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style method to attach an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Look up an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// True when the attribute is present and equal to `expected`.
    pub fn has_attribute_value(&self, name: &str, expected: &str) -> bool {
        self.attribute(name) == Some(expected)
    }
}

// =============================================================================
// CLUSTER B: STORAGE
// =============================================================================

/// Name of a private data collection (one per organization).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CollectionName(String);

impl CollectionName {
    /// Wrap an already-derived collection name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The collection name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An access-scoped region of the ledger key-value store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Partition {
    /// World state, visible to every participant.
    Public,
    /// Private data collection, visible only to its members.
    Private(CollectionName),
}

impl Partition {
    /// The collection backing a private partition.
    pub fn collection(&self) -> Option<&CollectionName> {
        match self {
            Self::Public => None,
            Self::Private(collection) => Some(collection),
        }
    }

    /// Check if this is a private partition.
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private(_))
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public => f.write_str("public"),
            Self::Private(collection) => write!(f, "private:{}", collection),
        }
    }
}

// =============================================================================
// CLUSTER C: INVOCATION
// =============================================================================

/// Everything a contract operation knows about the invocation that is not a
/// direct argument.
#[derive(Debug, Clone)]
pub struct TxContext {
    /// Transaction id, used as the correlation id in logs.
    pub tx_id: Uuid,
    /// The submitting identity.
    pub identity: Identity,
    /// Out-of-band payload supplied with the proposal.
    pub transient: TransientPayload,
}

impl TxContext {
    /// Context with a fresh transaction id and an empty transient payload.
    pub fn new(identity: Identity) -> Self {
        Self {
            tx_id: Uuid::new_v4(),
            identity,
            transient: TransientPayload::new(),
        }
    }

    /// Builder-style method to attach a transient payload.
    pub fn with_transient(mut self, transient: TransientPayload) -> Self {
        self.transient = transient;
        self
    }

    /// Organization of the submitting identity.
    pub fn msp_id(&self) -> &str {
        &self.identity.msp_id
    }
}
