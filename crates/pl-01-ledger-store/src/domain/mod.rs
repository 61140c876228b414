//! # Domain Module
//!
//! Error types for the Ledger Store subsystem.

pub mod errors;

pub use errors::*;
