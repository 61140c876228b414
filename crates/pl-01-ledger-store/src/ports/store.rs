//! # Partitioned Store Port
//!
//! Key-value access scoped by partition, plus read access to the commitments
//! the ledger publishes for private writes.
//!
//! ## Guarantees a backend must provide
//!
//! - `put` into `Partition::Private(c)` republishes `sha256(bytes)` under
//!   `(c, key)` in the same logical transaction as the write.
//! - `delete` from `Partition::Private(c)` withdraws the commitment for
//!   `(c, key)` in the same logical transaction.
//! - Writes to `Partition::Public` never touch commitments.
//! - Per-key operations are serializable.

use crate::domain::StoreError;
use async_trait::async_trait;
use shared_types::{CollectionName, Partition};

/// Partitioned ledger state - outbound port for asset contracts.
#[async_trait]
pub trait PartitionedStore: Send + Sync {
    /// Read the bytes stored under `key`, if any.
    async fn get(&self, partition: &Partition, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `bytes` under `key`, replacing any previous value.
    async fn put(&self, partition: &Partition, key: &str, bytes: Vec<u8>)
        -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is a no-op.
    async fn delete(&self, partition: &Partition, key: &str) -> Result<(), StoreError>;

    /// Read the published commitment for a private key.
    ///
    /// Returns the raw digest bytes exactly as published. `None` (or an
    /// empty value from backends that cannot distinguish) means nothing was
    /// published.
    async fn get_commitment(
        &self,
        collection: &CollectionName,
        key: &str,
    ) -> Result<Option<Vec<u8>>, StoreError>;
}
