//! # SHA-256 Commitments
//!
//! A commitment is the SHA-256 digest of a record's canonical encoding. The
//! ledger publishes it in place of the private value; anyone holding the
//! plaintext can recompute it and compare.

use crate::errors::CryptoError;
use sha2::{Digest, Sha256};
use std::fmt;
use subtle::ConstantTimeEq;

/// Digest length in bytes.
pub const COMMITMENT_LEN: usize = 32;

/// SHA-256 output.
pub type Hash = [u8; COMMITMENT_LEN];

/// A 256-bit commitment to some canonical byte encoding.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment(Hash);

impl Commitment {
    /// Commit to `data`.
    pub fn of(data: &[u8]) -> Self {
        Self(sha256(data))
    }

    /// Wrap published digest bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let digest: Hash = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidDigestLength {
                expected: COMMITMENT_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(digest))
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &Hash {
        &self.0
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Compare against published bytes of arbitrary length.
    ///
    /// Runs in constant time over the digest. A length mismatch is simply
    /// unequal.
    pub fn matches(&self, published: &[u8]) -> bool {
        digests_equal(&self.0, published)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", self.to_hex())
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Commitment {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Hash data with SHA-256 (one-shot).
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// Constant-time byte comparison.
pub fn digests_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
