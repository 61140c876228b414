//! Integration tests spanning the ledger store and the asset contracts.

pub mod adversarial;
pub mod flows;
pub mod scenarios;

use pl_01_ledger_store::InMemoryLedger;
use pl_02_private_assets::PrivateAssetService;
use shared_types::{Identity, TransientPayload, TxContext};
use std::sync::Arc;

/// Fresh ledger plus a default private asset service over it.
pub fn private_fixture() -> (Arc<InMemoryLedger>, PrivateAssetService<InMemoryLedger>) {
    ledger_telemetry::init_for_tests();
    let ledger = Arc::new(InMemoryLedger::new());
    let service = PrivateAssetService::new(ledger.clone());
    (ledger, service)
}

/// Context for `msp_id`, carrying `privateValue` when given.
pub fn ctx_for(msp_id: &str, private_value: Option<&str>) -> TxContext {
    let ctx = TxContext::new(Identity::new(msp_id));
    match private_value {
        Some(value) => ctx.with_transient(
            TransientPayload::new().with_field("privateValue", value.as_bytes().to_vec()),
        ),
        None => ctx,
    }
}
