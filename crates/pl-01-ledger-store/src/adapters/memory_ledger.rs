//! In-Memory Ledger Adapter
//!
//! Implements `PartitionedStore` over hash maps. A plain key-value store does
//! not publish anything on its own, so the commitment republish for private
//! writes is done here by hand, under the same write lock as the write.

use crate::domain::StoreError;
use crate::ports::PartitionedStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_crypto::Commitment;
use shared_types::{CollectionName, Partition};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

#[derive(Default)]
struct LedgerState {
    /// partition -> (key -> bytes)
    entries: HashMap<Partition, HashMap<String, Vec<u8>>>,
    /// (collection, key) -> published digest bytes
    commitments: HashMap<(CollectionName, String), Vec<u8>>,
}

/// In-memory ledger state for tests and single-process deployments.
#[derive(Default)]
pub struct InMemoryLedger {
    state: RwLock<LedgerState>,
    /// Successful `put`/`delete` calls.
    mutations: AtomicU64,
}

impl InMemoryLedger {
    /// Create a new empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful mutating calls so far.
    pub fn mutation_count(&self) -> u64 {
        self.mutations.load(Ordering::SeqCst)
    }

    /// Number of keys held in a partition.
    pub fn len(&self, partition: &Partition) -> usize {
        self.state
            .read()
            .entries
            .get(partition)
            .map_or(0, HashMap::len)
    }

    /// Check if a partition holds no keys.
    pub fn is_empty(&self, partition: &Partition) -> bool {
        self.len(partition) == 0
    }

    /// Publish arbitrary digest bytes for a private key without writing the
    /// key itself. Test fixture for commitments produced elsewhere.
    pub fn seed_commitment(&self, collection: CollectionName, key: &str, digest: Vec<u8>) {
        self.state
            .write()
            .commitments
            .insert((collection, key.to_string()), digest);
    }

    fn check_key(key: &str) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::InvalidKey(
                "key must not be an empty string".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl PartitionedStore for InMemoryLedger {
    async fn get(&self, partition: &Partition, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let state = self.state.read();
        Ok(state
            .entries
            .get(partition)
            .and_then(|entries| entries.get(key))
            .cloned())
    }

    async fn put(
        &self,
        partition: &Partition,
        key: &str,
        bytes: Vec<u8>,
    ) -> Result<(), StoreError> {
        Self::check_key(key)?;

        let mut state = self.state.write();
        if let Some(collection) = partition.collection() {
            let commitment = Commitment::of(&bytes);
            debug!(
                "[pl-01] Republishing commitment {} for {}/{}",
                commitment, collection, key
            );
            state
                .commitments
                .insert((collection.clone(), key.to_string()), commitment.as_bytes().to_vec());
        }

        debug!("[pl-01] Put {} bytes at {}/{}", bytes.len(), partition, key);
        state
            .entries
            .entry(partition.clone())
            .or_default()
            .insert(key.to_string(), bytes);
        drop(state);

        self.mutations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn delete(&self, partition: &Partition, key: &str) -> Result<(), StoreError> {
        Self::check_key(key)?;

        let mut state = self.state.write();
        if let Some(entries) = state.entries.get_mut(partition) {
            entries.remove(key);
        }
        if let Some(collection) = partition.collection() {
            state
                .commitments
                .remove(&(collection.clone(), key.to_string()));
        }
        drop(state);

        debug!("[pl-01] Deleted {}/{}", partition, key);
        self.mutations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn get_commitment(
        &self,
        collection: &CollectionName,
        key: &str,
    ) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self
            .state
            .read()
            .commitments
            .get(&(collection.clone(), key.to_string()))
            .cloned())
    }
}
