//! # PL-02 Private Assets
//!
//! Organization-scoped assets whose plaintext never leaves the owner's
//! private collection.
//!
//! **Subsystem ID:** 2  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Resolve the caller's organization to its implicit private collection
//! - Take values from the transient payload only, so they stay out of the
//!   public transaction record
//! - Store records as `{"privateValue":"..."}`
//! - Let any participant check a claimed value against the SHA-256
//!   commitment the ledger publishes for each private write
//!
//! ## Privacy Rules
//!
//! | Rule | Where |
//! |------|-------|
//! | Values only from transient data | `TransientValidator` |
//! | Writes only to the caller's collection | `CollectionResolver` |
//! | No mutation on any failed check | `PrivateAssetService` |
//! | Values never logged | `PrivateAssetService`, `TransientPayload` |
//!
//! ## Module Structure
//!
//! ```text
//! pl-02-private-assets/
//! ├── domain/          # Resolver, validator, codec, commitments, config
//! ├── ports/           # PrivateAssetApi + PartitionedStore
//! ├── service/         # PrivateAssetService
//! ├── error.rs         # AssetError
//! └── metrics.rs       # ServiceStats
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::{
    commitment_of, compute_commitment, CollectionResolver, PrivateAsset, PrivateAssetConfig,
    TransientValidator, Verification, DEFAULT_COLLECTION_PREFIX, DEFAULT_MAX_VALUE_BYTES,
    MISSING_FIELD_MESSAGE, PRIVATE_VALUE_FIELD,
};
pub use error::AssetError;
pub use metrics::{ServiceStats, StatsSnapshot};
pub use ports::{PartitionedStore, PrivateAssetApi};
pub use service::PrivateAssetService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
