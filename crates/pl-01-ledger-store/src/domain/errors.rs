//! # Domain Errors
//!
//! Failures a store backend can report. Absence of a key is not an error;
//! reads return `Ok(None)`.

use thiserror::Error;

/// Ledger store error types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Keys must be non-empty.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Backend could not serve the request.
    #[error("Store backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_error() {
        let err = StoreError::InvalidKey("key must not be an empty string".to_string());
        assert!(err.to_string().contains("empty string"));
    }

    #[test]
    fn test_backend_error() {
        let err = StoreError::Backend("peer unavailable".to_string());
        assert!(err.to_string().contains("peer unavailable"));
    }
}
