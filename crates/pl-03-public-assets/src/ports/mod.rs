//! Ports for public asset contracts

pub mod inbound;

pub use inbound::PublicAssetApi;
pub use pl_01_ledger_store::PartitionedStore;
