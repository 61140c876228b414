//! Public Asset Contract
//!
//! One generic contract per asset family. State lives on
//! `Partition::Public`, so nothing here ever touches a commitment.

use async_trait::async_trait;
use shared_types::{AttributeCapability, CapabilityPredicate, Partition, TxContext};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::domain::{AssetFamily, Car, Medical, PublicAsset};
use crate::error::PublicAssetError;
use crate::ports::{PartitionedStore, PublicAssetApi};

/// CRUD over the public partition for the asset family `F`.
pub struct PublicAssetContract<F: AssetFamily, S: PartitionedStore> {
    store: Arc<S>,
    capability: Arc<dyn CapabilityPredicate>,
    _family: PhantomData<fn() -> F>,
}

/// Car contract: manufacturers create, anyone reads.
pub type CarContract<S> = PublicAssetContract<Car, S>;

/// Medical record contract.
pub type MedicalContract<S> = PublicAssetContract<Medical, S>;

impl<F: AssetFamily, S: PartitionedStore> PublicAssetContract<F, S> {
    /// Contract checking attributes on the caller's identity.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_capability(store, Arc::new(AttributeCapability))
    }

    /// Contract with a custom authorization backend.
    pub fn with_capability(store: Arc<S>, capability: Arc<dyn CapabilityPredicate>) -> Self {
        Self {
            store,
            capability,
            _family: PhantomData,
        }
    }

    fn not_found(key: &str) -> PublicAssetError {
        PublicAssetError::NotFound {
            family: F::NAME,
            key: key.to_string(),
        }
    }

    async fn stored_value(&self, key: &str) -> Result<Option<Vec<u8>>, PublicAssetError> {
        let stored = self.store.get(&Partition::Public, key).await?;
        Ok(stored.filter(|bytes| !bytes.is_empty()))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), PublicAssetError> {
        let bytes = PublicAsset::new(value).to_bytes()?;
        self.store.put(&Partition::Public, key, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl<F: AssetFamily, S: PartitionedStore + 'static> PublicAssetApi for PublicAssetContract<F, S> {
    async fn exists(&self, key: &str) -> Result<bool, PublicAssetError> {
        Ok(self.stored_value(key).await?.is_some())
    }

    #[instrument(skip(self, ctx, value), fields(family = F::NAME, msp_id = %ctx.msp_id()))]
    async fn create(
        &self,
        ctx: &TxContext,
        key: &str,
        value: &str,
    ) -> Result<(), PublicAssetError> {
        if let Some(required) = F::create_requirement() {
            if !self.capability.authorize(&ctx.identity, &required) {
                debug!("[pl-03] {} create refused, caller lacks {}", F::NAME, required);
                return Err(PublicAssetError::Unauthorized(F::denial_message()));
            }
        }

        if self.stored_value(key).await?.is_some() {
            return Err(PublicAssetError::AlreadyExists {
                family: F::NAME,
                key: key.to_string(),
            });
        }

        self.write(key, value).await?;
        info!("[pl-03] Created {} {}", F::NAME, key);
        Ok(())
    }

    async fn read(&self, key: &str) -> Result<PublicAsset, PublicAssetError> {
        let bytes = self
            .stored_value(key)
            .await?
            .ok_or_else(|| Self::not_found(key))?;
        PublicAsset::from_bytes(&bytes)
    }

    #[instrument(skip(self, value), fields(family = F::NAME))]
    async fn update(&self, key: &str, value: &str) -> Result<(), PublicAssetError> {
        if self.stored_value(key).await?.is_none() {
            return Err(Self::not_found(key));
        }

        self.write(key, value).await?;
        info!("[pl-03] Updated {} {}", F::NAME, key);
        Ok(())
    }

    #[instrument(skip(self), fields(family = F::NAME))]
    async fn delete(&self, key: &str) -> Result<(), PublicAssetError> {
        if self.stored_value(key).await?.is_none() {
            return Err(Self::not_found(key));
        }

        self.store.delete(&Partition::Public, key).await?;
        info!("[pl-03] Deleted {} {}", F::NAME, key);
        Ok(())
    }
}
