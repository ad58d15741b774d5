// ============================================================================
// Order Book
// Public single-instrument book with single-writer serialization
// ============================================================================

use parking_lot::Mutex;
use tracing::trace;

use crate::book::{BookSnapshot, LevelInfo};
use crate::domain::{BookConfig, Fill, Order, OrderId, Side};
use crate::numeric::TickPrice;

use super::core::BookCore;
use super::stats::{BookStats, StatsSnapshot};

/// A price-time-priority limit order book for one instrument.
///
/// All mutation is serialized behind a single mutex: submissions observed in
/// order produce fills in that order, and fill sequence numbers are assigned
/// in processing order. Readers take the same lock for a consistent view;
/// the statistics counters alone are lock-free.
///
/// Fills are appended to a caller-supplied buffer, which the caller owns.
pub struct OrderBook {
    instrument: String,
    core: Mutex<BookCore>,
    stats: BookStats,
}

impl OrderBook {
    /// Create a book from a validated configuration.
    pub fn new(config: BookConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self {
            instrument: config.instrument,
            core: Mutex::new(BookCore::with_capacity(config.capacity_hint)),
            stats: BookStats::new(),
        })
    }

    /// Convenience constructor with an unnamed instrument and a resting-order
    /// capacity hint.
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self {
            instrument: "UNNAMED".to_string(),
            core: Mutex::new(BookCore::with_capacity(capacity_hint)),
            stats: BookStats::new(),
        }
    }

    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Submit an order, appending any fills to `out_fills`.
    ///
    /// Returns `true` when the submission was admitted (which for
    /// fill-or-kill implies a complete fill). `true` does not imply fills: a
    /// resting limit order returns `true` with an untouched buffer. Returns
    /// `false` for invalid submissions and unfillable fill-or-kill orders,
    /// in which case nothing was mutated.
    pub fn submit(&self, order: Order, out_fills: &mut Vec<Fill>) -> bool {
        let fills_before = out_fills.len();
        let accepted = self.core.lock().submit(&order, out_fills);

        if accepted {
            let fills = (out_fills.len() - fills_before) as u64;
            self.stats.record_order();
            self.stats.record_fills(fills);
            trace!(
                instrument = %self.instrument,
                id = order.id.as_u64(),
                fills,
                "order accepted"
            );
        }

        accepted
    }

    /// Cancel a resting order by id. Returns `false` for ids that are
    /// unknown or no longer resting (fully filled orders included).
    pub fn cancel(&self, id: u64) -> bool {
        let id = OrderId::new(id);
        let cancelled = self.core.lock().cancel(id);
        if cancelled {
            trace!(instrument = %self.instrument, id = id.as_u64(), "order cancelled");
        }
        cancelled
    }

    // ========================================================================
    // Market data
    // ========================================================================

    /// Best bid as a currency value, `None` when the bid side is empty.
    pub fn best_bid(&self) -> Option<f64> {
        self.best_bid_tick().map(TickPrice::to_currency)
    }

    /// Best ask as a currency value, `None` when the ask side is empty.
    pub fn best_ask(&self) -> Option<f64> {
        self.best_ask_tick().map(TickPrice::to_currency)
    }

    pub fn best_bid_tick(&self) -> Option<TickPrice> {
        self.core.lock().best_bid_tick()
    }

    pub fn best_ask_tick(&self) -> Option<TickPrice> {
        self.core.lock().best_ask_tick()
    }

    /// Up to `n` aggregated levels on one side, best price first. Snapshot
    /// semantics: the result reflects the book at the time of the call.
    pub fn top_levels(&self, side: Side, n: usize) -> Vec<LevelInfo> {
        self.core.lock().top_levels(side, n)
    }

    /// Consistent two-sided snapshot of the top `depth` levels.
    pub fn snapshot(&self, depth: usize) -> BookSnapshot {
        self.core.lock().snapshot(&self.instrument, depth)
    }

    /// Number of resting orders across both sides.
    pub fn order_count(&self) -> usize {
        self.core.lock().order_count()
    }

    /// Total resting quantity on one side.
    pub fn total_volume(&self, side: Side) -> u64 {
        self.core.lock().total_volume(side)
    }

    /// Whether an id is currently resting.
    pub fn contains(&self, id: u64) -> bool {
        self.core.lock().contains(OrderId::new(id))
    }

    /// Monotonic counters: accepted submissions and emitted fills.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Panic if any internal invariant is violated. Intended for tests and
    /// debug tooling; a failure here means the book state is corrupt.
    pub fn assert_invariants(&self) {
        self.core.lock().assert_invariants();
    }
}
