//! Inbound Ports (Driving Ports)
//!
//! The operations a caller can invoke on the private asset family.

use async_trait::async_trait;
use shared_types::TxContext;

use crate::domain::PrivateAsset;
use crate::error::AssetError;

/// Private asset API (Driving Port)
///
/// Every operation except `verify` works on the caller's own collection,
/// derived from `ctx.identity`. Values for `create` and `update` arrive in
/// `ctx.transient`, never as arguments.
#[async_trait]
pub trait PrivateAssetApi: Send + Sync {
    /// Whether `key` holds a non-empty value in the caller's collection
    async fn exists(&self, ctx: &TxContext, key: &str) -> Result<bool, AssetError>;

    /// Create `key` from the transient `privateValue`
    ///
    /// Fails with `AlreadyExists` if the key is present, `Validation` if the
    /// payload lacks the field.
    async fn create(&self, ctx: &TxContext, key: &str) -> Result<(), AssetError>;

    /// Read and decode `key`
    async fn read(&self, ctx: &TxContext, key: &str) -> Result<PrivateAsset, AssetError>;

    /// Overwrite `key` with the transient `privateValue`
    async fn update(&self, ctx: &TxContext, key: &str) -> Result<(), AssetError>;

    /// Remove `key` and, with it, its published commitment
    async fn delete(&self, ctx: &TxContext, key: &str) -> Result<(), AssetError>;

    /// Check `candidate` against the commitment published for `key` in
    /// `org_id`'s collection
    ///
    /// `Ok(false)` means a commitment exists and does not match.
    /// `CommitmentNotFound` means there was nothing to compare against.
    async fn verify(
        &self,
        org_id: &str,
        key: &str,
        candidate: &PrivateAsset,
    ) -> Result<bool, AssetError>;
}
