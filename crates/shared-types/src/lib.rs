//! # Shared Types Crate
//!
//! Types every contract crate agrees on: who is calling, which partition a
//! key lives in, what arrived out-of-band with the request, and how
//! capabilities are checked.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: cross-contract types are defined here.
//! - **Identity from context only**: operations take a `TxContext`; payloads
//!   never carry their own caller identity.
//! - **Transient data stays transient**: `TransientPayload` never prints its
//!   values.

pub mod entities;
pub mod security;
pub mod transient;

pub use entities::*;
pub use security::*;
pub use transient::TransientPayload;
