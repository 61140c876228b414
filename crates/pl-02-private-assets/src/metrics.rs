//! Operation counters for the private asset service
//!
//! Counters are relaxed atomics: they are for monitoring, not for
//! synchronizing anything.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters updated by `PrivateAssetService`.
#[derive(Debug, Default)]
pub struct ServiceStats {
    created: AtomicU64,
    updated: AtomicU64,
    deleted: AtomicU64,
    reads: AtomicU64,
    verifications_matched: AtomicU64,
    verifications_mismatched: AtomicU64,
    rejected_requests: AtomicU64,
}

impl ServiceStats {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a successful create
    pub fn record_created(&self) {
        self.created.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a successful update
    pub fn record_updated(&self) {
        self.updated.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a successful delete
    pub fn record_deleted(&self) {
        self.deleted.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a successful read
    pub fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a verification that found a commitment to compare against
    pub fn record_verification(&self, matched: bool) {
        let counter = if matched {
            &self.verifications_matched
        } else {
            &self.verifications_mismatched
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request turned away by validation or authorization
    pub fn record_rejected(&self) {
        self.rejected_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current counters
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            created: self.created.load(Ordering::Relaxed),
            updated: self.updated.load(Ordering::Relaxed),
            deleted: self.deleted.load(Ordering::Relaxed),
            reads: self.reads.load(Ordering::Relaxed),
            verifications_matched: self.verifications_matched.load(Ordering::Relaxed),
            verifications_mismatched: self.verifications_mismatched.load(Ordering::Relaxed),
            rejected_requests: self.rejected_requests.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of `ServiceStats`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Assets created
    pub created: u64,
    /// Assets updated
    pub updated: u64,
    /// Assets deleted
    pub deleted: u64,
    /// Successful reads
    pub reads: u64,
    /// Verifications whose candidate matched
    pub verifications_matched: u64,
    /// Verifications whose candidate did not match
    pub verifications_mismatched: u64,
    /// Requests refused by validation or authorization
    pub rejected_requests: u64,
}
