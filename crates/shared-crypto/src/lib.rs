//! # Shared Crypto - Commitment Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256 | Private data commitments |
//!
//! ## Security Properties
//!
//! - **SHA-256**: collision resistant, 256-bit output, matches the digest the
//!   ledger publishes for private data
//! - **Comparison**: digest equality goes through `subtle::ConstantTimeEq`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{digests_equal, sha256, Commitment, Hash, COMMITMENT_LEN};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
