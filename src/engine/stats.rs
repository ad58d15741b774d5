// ============================================================================
// Book Statistics
// Monotonic counters for processed orders and generated fills
// ============================================================================

use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Monotonic book counters. Never reset during the book's lifetime.
///
/// Kept outside the book mutex as atomics so market-data readers can poll
/// them without contending with the matching path.
#[derive(Debug, Default)]
pub struct BookStats {
    orders_processed: AtomicU64,
    fills_generated: AtomicU64,
}

impl BookStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one accepted submission.
    #[inline]
    pub(crate) fn record_order(&self) {
        self.orders_processed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record `count` emitted fills.
    #[inline]
    pub(crate) fn record_fills(&self, count: u64) {
        if count > 0 {
            self.fills_generated.fetch_add(count, Ordering::Relaxed);
        }
    }

    #[inline]
    pub fn orders_processed(&self) -> u64 {
        self.orders_processed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn fills_generated(&self) -> u64 {
        self.fills_generated.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            orders_processed: self.orders_processed(),
            fills_generated: self.fills_generated(),
        }
    }
}

/// Plain copy of the counters at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StatsSnapshot {
    pub orders_processed: u64,
    pub fills_generated: u64,
}
