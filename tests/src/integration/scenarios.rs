//! # Private Asset Lifecycles
//!
//! End-to-end runs of the private asset contract, checking what the owner
//! reads back and what every other participant can see on the ledger.

#[cfg(test)]
mod tests {
    use super::super::{ctx_for, private_fixture};
    use pl_02_private_assets::{
        commitment_of, AssetError, PartitionedStore, PrivateAsset, PrivateAssetApi,
    };
    use shared_crypto::Commitment;
    use shared_types::CollectionName;

    fn org_one() -> CollectionName {
        CollectionName::new("_implicit_org_one")
    }

    #[tokio::test]
    async fn test_create_then_read_returns_transient_value() {
        let (_, service) = private_fixture();

        service
            .create(&ctx_for("one", Some("1500")), "001")
            .await
            .unwrap();

        let asset = service.read(&ctx_for("one", None), "001").await.unwrap();
        assert_eq!(asset.private_value, "1500");
    }

    #[tokio::test]
    async fn test_published_commitment_is_checkable_by_anyone() {
        let (ledger, service) = private_fixture();
        service
            .create(&ctx_for("one", Some("150")), "001")
            .await
            .unwrap();

        // printf '{"privateValue":"150"}' | sha256sum
        let published = ledger.get_commitment(&org_one(), "001").await.unwrap().unwrap();
        assert_eq!(
            hex::encode(&published),
            "c17dff86445bdeef8f080f2c6d92b3457433742fefc0cd30442cb8936350e4ec"
        );

        assert!(service
            .verify("one", "001", &PrivateAsset::new("150"))
            .await
            .unwrap());
        assert!(!service
            .verify("one", "001", &PrivateAsset::new("someValue"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_verify_without_prior_write() {
        let (_, service) = private_fixture();

        let err = service
            .verify("one", "001", &PrivateAsset::new("anyValue"))
            .await
            .unwrap_err();

        assert!(matches!(err, AssetError::CommitmentNotFound { .. }));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_replaces_current_commitment() {
        let (ledger, service) = private_fixture();
        service
            .create(&ctx_for("one", Some("150")), "001")
            .await
            .unwrap();
        let before = ledger.get_commitment(&org_one(), "001").await.unwrap();

        service
            .update(&ctx_for("one", Some("99")), "001")
            .await
            .unwrap();

        let after = ledger.get_commitment(&org_one(), "001").await.unwrap().unwrap();
        assert_ne!(before, Some(after.clone()));
        assert_eq!(
            after,
            commitment_of(&PrivateAsset::new("99"))
                .unwrap()
                .as_bytes()
                .to_vec()
        );
        // printf '{"privateValue":"99"}' | sha256sum
        assert_eq!(
            Commitment::from_slice(&after).unwrap().to_hex(),
            "f176801937a1ee429c09948a2ee96457526a25199bb542ed40ec6e5c0fae6908"
        );
    }

    #[tokio::test]
    async fn test_full_lifecycle() {
        let (ledger, service) = private_fixture();
        let owner = ctx_for("one", None);

        assert!(!service.exists(&owner, "001").await.unwrap());
        service
            .create(&ctx_for("one", Some("1500")), "001")
            .await
            .unwrap();
        assert!(service.exists(&owner, "001").await.unwrap());

        service
            .update(&ctx_for("one", Some("1600")), "001")
            .await
            .unwrap();
        assert_eq!(
            service.read(&owner, "001").await.unwrap(),
            PrivateAsset::new("1600")
        );

        service.delete(&owner, "001").await.unwrap();
        assert!(!service.exists(&owner, "001").await.unwrap());
        assert!(matches!(
            service.read(&owner, "001").await,
            Err(AssetError::NotFound { .. })
        ));
        assert_eq!(ledger.mutation_count(), 3);
    }
}
