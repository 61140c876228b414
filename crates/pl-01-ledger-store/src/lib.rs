//! # PL-01 Ledger Store
//!
//! Partitioned key-value state with published commitments for private data.
//!
//! **Subsystem ID:** 1  
//! **Architecture:** Hexagonal (Ports/Adapters)
//!
//! ## Purpose
//!
//! Every asset contract reads and writes through one port:
//! - A single public partition visible to all participants
//! - One private collection per organization
//! - A SHA-256 commitment republished for every private write, keyed by
//!   `(collection, key)`, readable by anyone
//!
//! ## Module Structure
//!
//! ```text
//! pl-01-ledger-store/
//! ├── domain/          # StoreError
//! ├── ports/           # PartitionedStore trait
//! └── adapters/        # InMemoryLedger
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::InMemoryLedger;
pub use domain::StoreError;
pub use ports::PartitionedStore;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
