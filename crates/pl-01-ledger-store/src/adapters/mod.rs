//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the `PartitionedStore` port.

mod memory_ledger;

pub use memory_ledger::InMemoryLedger;
