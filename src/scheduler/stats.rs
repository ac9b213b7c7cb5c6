/*!
 * Lock-Free Apply Statistics
 * Atomic counters for the apply path, snapshotted for monitoring
 */

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time view of apply outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerStats {
    /// Every apply call
    pub requested: u64,
    /// Skipped because no base priority is configured
    pub skipped_disabled: u64,
    /// Skipped because the thread could not be resolved or vanished
    pub skipped_stale: u64,
    /// Host accepted the reset-on-fork variant
    pub applied: u64,
    /// Host accepted only the plain variant
    pub applied_fallback: u64,
    /// Both variants rejected
    pub failed: u64,
}

/// Atomic counters behind `SchedulerStats`
///
/// # Performance
/// - Cache-line aligned to prevent false sharing
/// - Relaxed ordering; counters are independent of each other
#[repr(C, align(64))]
#[derive(Debug, Default)]
pub struct AtomicSchedulerStats {
    requested: AtomicU64,
    skipped_disabled: AtomicU64,
    skipped_stale: AtomicU64,
    applied: AtomicU64,
    applied_fallback: AtomicU64,
    failed: AtomicU64,
}

impl AtomicSchedulerStats {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn inc_requested(&self) {
        self.requested.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_skipped_disabled(&self) {
        self.skipped_disabled.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_skipped_stale(&self) {
        self.skipped_stale.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_applied(&self) {
        self.applied.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_applied_fallback(&self) {
        self.applied_fallback.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot of all counters
    ///
    /// # Note
    /// Counters may be mutually inconsistent under concurrent applies, but
    /// each value is accurate on its own.
    #[inline]
    pub fn snapshot(&self) -> SchedulerStats {
        SchedulerStats {
            requested: self.requested.load(Ordering::Relaxed),
            skipped_disabled: self.skipped_disabled.load(Ordering::Relaxed),
            skipped_stale: self.skipped_stale.load(Ordering::Relaxed),
            applied: self.applied.load(Ordering::Relaxed),
            applied_fallback: self.applied_fallback.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}
