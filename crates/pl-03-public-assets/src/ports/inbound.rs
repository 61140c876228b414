//! Inbound Ports (Driving Ports)

use async_trait::async_trait;
use shared_types::TxContext;

use crate::domain::PublicAsset;
use crate::error::PublicAssetError;

/// Public asset API (Driving Port)
///
/// Values travel as ordinary arguments and land on the public partition.
#[async_trait]
pub trait PublicAssetApi: Send + Sync {
    /// Whether `key` holds a non-empty value
    async fn exists(&self, key: &str) -> Result<bool, PublicAssetError>;

    /// Create `key` holding `value`, subject to the family's requirement
    async fn create(&self, ctx: &TxContext, key: &str, value: &str)
        -> Result<(), PublicAssetError>;

    /// Read and decode `key`
    async fn read(&self, key: &str) -> Result<PublicAsset, PublicAssetError>;

    /// Overwrite an existing `key`
    async fn update(&self, key: &str, value: &str) -> Result<(), PublicAssetError>;

    /// Remove an existing `key`
    async fn delete(&self, key: &str) -> Result<(), PublicAssetError>;
}
