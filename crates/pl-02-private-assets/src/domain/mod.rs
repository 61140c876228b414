//! # Domain Layer
//!
//! Pure logic, no I/O: collection naming, transient extraction, the
//! canonical codec and commitment checks.

pub mod codec;
pub mod collection;
pub mod commitment;
pub mod config;
pub mod entities;
pub mod transient;

pub use collection::{CollectionResolver, DEFAULT_COLLECTION_PREFIX};
pub use commitment::{commitment_of, compute_commitment};
pub use config::{PrivateAssetConfig, DEFAULT_MAX_VALUE_BYTES};
pub use entities::{PrivateAsset, Verification, PRIVATE_VALUE_FIELD};
pub use transient::{TransientValidator, MISSING_FIELD_MESSAGE};
