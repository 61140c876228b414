//! # Ports
//!
//! The partitioned store contract consumed by every asset contract.

pub mod store;

pub use store::PartitionedStore;
