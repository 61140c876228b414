//! # Commitment Verifier
//!
//! Recomputes the commitment for a candidate plaintext and compares it with
//! what the ledger published. "Nothing published" is reported separately
//! from "published but different".

use super::codec;
use super::entities::{PrivateAsset, Verification};
use crate::error::AssetError;
use shared_crypto::Commitment;

/// SHA-256 commitment over canonical bytes.
pub fn compute_commitment(bytes: &[u8]) -> Commitment {
    Commitment::of(bytes)
}

/// Commitment the ledger would publish for `asset`.
pub fn commitment_of(asset: &PrivateAsset) -> Result<Commitment, AssetError> {
    codec::encode(asset).map(|bytes| compute_commitment(&bytes))
}

/// Compare `candidate` against the published digest bytes.
///
/// Absent or empty bytes mean no commitment. Bytes of any other length are
/// compared as-is and simply fail to match.
pub fn verify(
    candidate: &PrivateAsset,
    published: Option<&[u8]>,
) -> Result<Verification, AssetError> {
    let published = match published {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => return Ok(Verification::NoCommitment),
    };

    if commitment_of(candidate)?.matches(published) {
        Ok(Verification::Match)
    } else {
        Ok(Verification::Mismatch)
    }
}
