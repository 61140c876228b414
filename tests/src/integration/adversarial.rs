//! # Adversarial Callers and Backends
//!
//! Requests that try to escape the caller's collection, smuggle values
//! outside the transient payload, or hit a failing backend.

#[cfg(test)]
mod tests {
    use super::super::{ctx_for, private_fixture};
    use async_trait::async_trait;
    use parking_lot::RwLock;
    use pl_01_ledger_store::{InMemoryLedger, StoreError};
    use pl_02_private_assets::{
        AssetError, PartitionedStore, PrivateAsset, PrivateAssetApi, PrivateAssetConfig,
        PrivateAssetService, MISSING_FIELD_MESSAGE,
    };
    use shared_types::{
        AttributeCapability, CollectionName, Identity, Partition, RequiredAttribute,
        TransientPayload, TxContext,
    };
    use std::sync::Arc;

    /// Delegates to an in-memory ledger but fails every write.
    struct ReadOnlyLedger {
        inner: InMemoryLedger,
        attempted_writes: RwLock<Vec<String>>,
    }

    #[async_trait]
    impl PartitionedStore for ReadOnlyLedger {
        async fn get(&self, p: &Partition, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
            self.inner.get(p, key).await
        }

        async fn put(&self, _: &Partition, key: &str, _: Vec<u8>) -> Result<(), StoreError> {
            self.attempted_writes.write().push(key.to_string());
            Err(StoreError::Backend("read-only replica".into()))
        }

        async fn delete(&self, _: &Partition, key: &str) -> Result<(), StoreError> {
            self.attempted_writes.write().push(key.to_string());
            Err(StoreError::Backend("read-only replica".into()))
        }

        async fn get_commitment(
            &self,
            c: &CollectionName,
            key: &str,
        ) -> Result<Option<Vec<u8>>, StoreError> {
            self.inner.get_commitment(c, key).await
        }
    }

    #[tokio::test]
    async fn test_org_id_cannot_traverse_collections() {
        let (ledger, service) = private_fixture();

        for forged in ["one/../two", "one two", "", "_implicit_org_two\0"] {
            let result = service.create(&ctx_for(forged, Some("x")), "001").await;
            assert!(
                matches!(result, Err(AssetError::InvalidOrganization(_))),
                "accepted org id {:?}",
                forged
            );
        }
        assert_eq!(ledger.mutation_count(), 0);
    }

    #[tokio::test]
    async fn test_values_only_accepted_from_transient_field() {
        let (ledger, service) = private_fixture();
        let smuggled = TxContext::new(Identity::new("one").with_attribute("privateValue", "x"))
            .with_transient(TransientPayload::new().with_field("value", b"x".to_vec()));

        match service.create(&smuggled, "001").await {
            Err(AssetError::Validation(msg)) => assert_eq!(msg, MISSING_FIELD_MESSAGE),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(ledger.mutation_count(), 0);
    }

    #[tokio::test]
    async fn test_non_utf8_value_rejected() {
        let (ledger, service) = private_fixture();
        let ctx = TxContext::new(Identity::new("one"))
            .with_transient(TransientPayload::new().with_field("privateValue", vec![0xff, 0xfe]));

        let result = service.create(&ctx, "001").await;
        assert!(matches!(result, Err(AssetError::Validation(_))));
        assert_eq!(ledger.mutation_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_key_rejected_by_store() {
        let (ledger, service) = private_fixture();
        let result = service.create(&ctx_for("one", Some("1")), "").await;
        assert!(matches!(
            result,
            Err(AssetError::Store(StoreError::InvalidKey(_)))
        ));
        assert_eq!(ledger.mutation_count(), 0);
    }

    #[tokio::test]
    async fn test_transient_debug_output_is_redacted() {
        let ctx = ctx_for("one", Some("account-4471-balance"));
        let rendered = format!("{:?}", ctx);
        assert!(!rendered.contains("account-4471-balance"));
    }

    #[tokio::test]
    async fn test_backend_write_failure_surfaces() {
        let store = Arc::new(ReadOnlyLedger {
            inner: InMemoryLedger::new(),
            attempted_writes: RwLock::new(Vec::new()),
        });
        let service = PrivateAssetService::new(store.clone());

        let result = service.create(&ctx_for("one", Some("1")), "001").await;

        assert!(matches!(result, Err(AssetError::Store(StoreError::Backend(_)))));
        assert_eq!(*store.attempted_writes.read(), vec!["001".to_string()]);
        assert_eq!(service.stats().created, 0);
    }

    #[tokio::test]
    async fn test_write_requirement_blocks_reads_nothing() {
        ledger_telemetry::init_for_tests();
        let ledger = Arc::new(InMemoryLedger::new());
        let open = PrivateAssetService::new(ledger.clone());
        open.create(&ctx_for("one", Some("150")), "001").await.unwrap();

        let config = PrivateAssetConfig::default()
            .with_write_requirement(RequiredAttribute::new("role", "admin"));
        let guarded =
            PrivateAssetService::with_config(ledger.clone(), config, Arc::new(AttributeCapability))
                .unwrap();

        assert!(matches!(
            guarded.delete(&ctx_for("one", None), "001").await,
            Err(AssetError::Unauthorized { .. })
        ));
        assert_eq!(
            guarded.read(&ctx_for("one", None), "001").await.unwrap(),
            PrivateAsset::new("150")
        );
        assert!(guarded
            .verify("one", "001", &PrivateAsset::new("150"))
            .await
            .unwrap());
    }
}
