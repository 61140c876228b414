//! # Shared Ledger Flows
//!
//! Private and public contracts writing into the same ledger must not see
//! or disturb each other's state.

#[cfg(test)]
mod tests {
    use super::super::{ctx_for, private_fixture};
    use pl_02_private_assets::{PartitionedStore, PrivateAsset, PrivateAssetApi};
    use pl_03_public_assets::{CarContract, MedicalContract, PublicAsset, PublicAssetApi};
    use shared_types::{CollectionName, Identity, Partition, TxContext};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_same_key_in_public_and_private_partitions() {
        let (ledger, private) = private_fixture();
        let medical = MedicalContract::new(ledger.clone());

        medical
            .create(&ctx_for("one", None), "001", "public note")
            .await
            .unwrap();
        private
            .create(&ctx_for("one", Some("secret")), "001")
            .await
            .unwrap();

        assert_eq!(
            medical.read("001").await.unwrap(),
            PublicAsset::new("public note")
        );
        assert_eq!(
            private.read(&ctx_for("one", None), "001").await.unwrap(),
            PrivateAsset::new("secret")
        );

        medical.delete("001").await.unwrap();
        assert!(private.exists(&ctx_for("one", None), "001").await.unwrap());
    }

    #[tokio::test]
    async fn test_public_writes_leave_commitments_alone() {
        let (ledger, private) = private_fixture();
        let cars = CarContract::new(ledger.clone());
        let manufacturer =
            TxContext::new(Identity::new("one").with_attribute("manufacturer", "true"));

        private
            .create(&ctx_for("one", Some("150")), "001")
            .await
            .unwrap();
        cars.create(&manufacturer, "001", "red").await.unwrap();
        cars.update("001", "blue").await.unwrap();

        assert!(private
            .verify("one", "001", &PrivateAsset::new("150"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_private_state_never_reaches_public_partition() {
        let (ledger, private) = private_fixture();

        for (org, value) in [("one", "10"), ("two", "20"), ("three", "30")] {
            private
                .create(&ctx_for(org, Some(value)), "001")
                .await
                .unwrap();
        }

        assert!(ledger.is_empty(&Partition::Public));
        for org in ["one", "two", "three"] {
            let collection = CollectionName::new(format!("_implicit_org_{}", org));
            assert_eq!(ledger.len(&Partition::Private(collection)), 1);
        }
    }

    #[tokio::test]
    async fn test_concurrent_orgs_on_distinct_collections() {
        let (ledger, service) = private_fixture();
        let service = Arc::new(service);

        let mut handles = Vec::new();
        for i in 0..16 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                let org = format!("org{}", i);
                let value = format!("{}", i * 100);
                service
                    .create(&ctx_for(&org, Some(value.as_str())), "001")
                    .await
                    .unwrap();
                service
                    .verify(&org, "001", &PrivateAsset::new(value))
                    .await
                    .unwrap()
            }));
        }

        for handle in handles {
            assert!(handle.await.unwrap());
        }
        assert_eq!(ledger.mutation_count(), 16);
        assert_eq!(service.stats().verifications_matched, 16);
    }

    #[tokio::test]
    async fn test_cross_org_verification() {
        let (ledger, service) = private_fixture();
        service
            .create(&ctx_for("one", Some("150")), "001")
            .await
            .unwrap();

        // Org two holds no copy of the value but can check a claim about it.
        let auditor = ctx_for("two", None);
        assert!(!service.exists(&auditor, "001").await.unwrap());
        assert!(service
            .verify("one", "001", &PrivateAsset::new("150"))
            .await
            .unwrap());
        assert_eq!(
            ledger
                .get(
                    &Partition::Private(CollectionName::new("_implicit_org_two")),
                    "001"
                )
                .await
                .unwrap(),
            None
        );
    }
}
