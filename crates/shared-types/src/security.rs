//! # Capability Checks
//!
//! Contracts never inspect identities directly. They ask an injected
//! [`CapabilityPredicate`] whether the caller holds a required attribute.

use crate::entities::Identity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An attribute (name and expected value) an identity must carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequiredAttribute {
    /// Attribute name, e.g. `manufacturer`.
    pub name: String,
    /// Expected value, e.g. `true`.
    pub value: String,
}

impl RequiredAttribute {
    /// Create a new requirement.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for RequiredAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Authorization backend.
pub trait CapabilityPredicate: Send + Sync {
    /// Decide whether `identity` satisfies `required`.
    fn authorize(&self, identity: &Identity, required: &RequiredAttribute) -> bool;
}

/// Grants a capability when the identity's enrollment attribute matches the
/// expected value exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeCapability;

impl CapabilityPredicate for AttributeCapability {
    fn authorize(&self, identity: &Identity, required: &RequiredAttribute) -> bool {
        identity.has_attribute_value(&required.name, &required.value)
    }
}

/// Grants everything. Useful for deployments with no attribute policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl CapabilityPredicate for AllowAll {
    fn authorize(&self, _identity: &Identity, _required: &RequiredAttribute) -> bool {
        true
    }
}
