//! Ports Layer
//!
//! - Driving Port (inbound) - `PrivateAssetApi`
//! - Driven Port (outbound) - `PartitionedStore`, re-exported from pl-01

pub mod inbound;

pub use inbound::PrivateAssetApi;
pub use pl_01_ledger_store::PartitionedStore;
