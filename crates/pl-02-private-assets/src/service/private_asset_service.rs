//! Private Asset Service
//!
//! Orchestrates collection resolution, transient extraction, the codec and
//! commitment checks against an injected `PartitionedStore`.
//!
//! Each operation is one logical transaction: store calls are awaited one
//! after another and every check that can fail runs before the first write.

use async_trait::async_trait;
use shared_types::{
    AttributeCapability, CapabilityPredicate, Partition, RequiredAttribute, TxContext,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::domain::{
    codec, commitment, CollectionResolver, PrivateAsset, PrivateAssetConfig, TransientValidator,
};
use crate::error::AssetError;
use crate::metrics::{ServiceStats, StatsSnapshot};
use crate::ports::{PartitionedStore, PrivateAssetApi};

/// Private Asset Service implementation
///
/// Implements the `PrivateAssetApi` port using injected dependencies.
pub struct PrivateAssetService<S: PartitionedStore> {
    /// Ledger state (driven port)
    store: Arc<S>,
    /// Authorization backend
    capability: Arc<dyn CapabilityPredicate>,
    resolver: CollectionResolver,
    validator: TransientValidator,
    write_requirement: Option<RequiredAttribute>,
    stats: ServiceStats,
}

impl<S: PartitionedStore> PrivateAssetService<S> {
    /// Create a new service with the default configuration
    pub fn new(store: Arc<S>) -> Self {
        let config = PrivateAssetConfig::default();
        Self {
            store,
            capability: Arc::new(AttributeCapability),
            resolver: CollectionResolver::new(config.collection_prefix),
            validator: TransientValidator::new(config.max_value_bytes),
            write_requirement: config.write_requirement,
            stats: ServiceStats::new(),
        }
    }

    /// Create with custom configuration and authorization backend
    pub fn with_config(
        store: Arc<S>,
        config: PrivateAssetConfig,
        capability: Arc<dyn CapabilityPredicate>,
    ) -> Result<Self, AssetError> {
        config.validate()?;
        Ok(Self {
            store,
            capability,
            resolver: CollectionResolver::new(config.collection_prefix),
            validator: TransientValidator::new(config.max_value_bytes),
            write_requirement: config.write_requirement,
            stats: ServiceStats::new(),
        })
    }

    /// The resolver used to name collections
    pub fn resolver(&self) -> &CollectionResolver {
        &self.resolver
    }

    /// Current operation counters
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Caller's private partition
    fn caller_partition(&self, ctx: &TxContext) -> Result<Partition, AssetError> {
        self.resolver.partition(ctx.msp_id())
    }

    /// Enforce the configured write requirement, if any
    fn authorize_write(&self, ctx: &TxContext) -> Result<(), AssetError> {
        let Some(required) = &self.write_requirement else {
            return Ok(());
        };

        if self.capability.authorize(&ctx.identity, required) {
            return Ok(());
        }

        warn!(
            "[pl-02] Rejected write from {}: missing attribute {}",
            ctx.msp_id(),
            required
        );
        self.stats.record_rejected();
        Err(AssetError::Unauthorized {
            attribute: required.clone(),
        })
    }

    /// Transient value, counted as a rejection when absent or invalid
    fn transient_value(&self, ctx: &TxContext) -> Result<String, AssetError> {
        self.validator.extract_value(&ctx.transient).inspect_err(|_| {
            self.stats.record_rejected();
        })
    }

    /// Stored bytes for `key`, with an empty value treated as absent
    ///
    /// Every existence check in this service goes through here.
    async fn stored_value(
        &self,
        partition: &Partition,
        key: &str,
    ) -> Result<Option<Vec<u8>>, AssetError> {
        let stored = self.store.get(partition, key).await?;
        Ok(stored.filter(|bytes| !bytes.is_empty()))
    }

    /// Encode `value` and write it under `key`
    async fn write_value(
        &self,
        partition: &Partition,
        key: &str,
        value: String,
    ) -> Result<(), AssetError> {
        let bytes = codec::encode(&PrivateAsset::new(value))?;
        self.store.put(partition, key, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl<S: PartitionedStore + 'static> PrivateAssetApi for PrivateAssetService<S> {
    #[instrument(skip(self, ctx), fields(tx_id = %ctx.tx_id, msp_id = %ctx.msp_id()))]
    async fn exists(&self, ctx: &TxContext, key: &str) -> Result<bool, AssetError> {
        let partition = self.caller_partition(ctx)?;
        Ok(self.stored_value(&partition, key).await?.is_some())
    }

    #[instrument(skip(self, ctx), fields(tx_id = %ctx.tx_id, msp_id = %ctx.msp_id()))]
    async fn create(&self, ctx: &TxContext, key: &str) -> Result<(), AssetError> {
        self.authorize_write(ctx)?;
        let partition = self.caller_partition(ctx)?;

        if self.stored_value(&partition, key).await?.is_some() {
            debug!("[pl-02] Create refused, {} already exists in {}", key, partition);
            return Err(AssetError::AlreadyExists {
                key: key.to_string(),
            });
        }

        let value = self.transient_value(ctx)?;
        self.write_value(&partition, key, value).await?;

        self.stats.record_created();
        info!("[pl-02] Created private asset {} in {}", key, partition);
        Ok(())
    }

    #[instrument(skip(self, ctx), fields(tx_id = %ctx.tx_id, msp_id = %ctx.msp_id()))]
    async fn read(&self, ctx: &TxContext, key: &str) -> Result<PrivateAsset, AssetError> {
        let partition = self.caller_partition(ctx)?;

        let bytes = self
            .stored_value(&partition, key)
            .await?
            .ok_or_else(|| AssetError::NotFound {
                key: key.to_string(),
            })?;

        let asset = codec::decode(&bytes)?;
        self.stats.record_read();
        Ok(asset)
    }

    #[instrument(skip(self, ctx), fields(tx_id = %ctx.tx_id, msp_id = %ctx.msp_id()))]
    async fn update(&self, ctx: &TxContext, key: &str) -> Result<(), AssetError> {
        self.authorize_write(ctx)?;
        let partition = self.caller_partition(ctx)?;

        if self.stored_value(&partition, key).await?.is_none() {
            return Err(AssetError::NotFound {
                key: key.to_string(),
            });
        }

        let value = self.transient_value(ctx)?;
        self.write_value(&partition, key, value).await?;

        self.stats.record_updated();
        info!("[pl-02] Updated private asset {} in {}", key, partition);
        Ok(())
    }

    #[instrument(skip(self, ctx), fields(tx_id = %ctx.tx_id, msp_id = %ctx.msp_id()))]
    async fn delete(&self, ctx: &TxContext, key: &str) -> Result<(), AssetError> {
        self.authorize_write(ctx)?;
        let partition = self.caller_partition(ctx)?;

        if self.stored_value(&partition, key).await?.is_none() {
            return Err(AssetError::NotFound {
                key: key.to_string(),
            });
        }

        self.store.delete(&partition, key).await?;

        self.stats.record_deleted();
        info!("[pl-02] Deleted private asset {} from {}", key, partition);
        Ok(())
    }

    #[instrument(skip(self, candidate))]
    async fn verify(
        &self,
        org_id: &str,
        key: &str,
        candidate: &PrivateAsset,
    ) -> Result<bool, AssetError> {
        let collection = self.resolver.resolve(org_id)?;
        let published = self.store.get_commitment(&collection, key).await?;

        let verification = commitment::verify(candidate, published.as_deref())?;
        let Some(matched) = verification.outcome() else {
            debug!("[pl-02] No commitment published for {}/{}", collection, key);
            return Err(AssetError::CommitmentNotFound {
                key: key.to_string(),
            });
        };

        self.stats.record_verification(matched);
        debug!("[pl-02] Verified {}/{}: {:?}", collection, key, verification);
        Ok(matched)
    }
}
