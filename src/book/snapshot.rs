// ============================================================================
// Book Snapshots
// Point-in-time level-2 market data views
// ============================================================================

use crate::numeric::TickPrice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One aggregated price level as seen by market-data consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LevelInfo {
    pub price_tick: TickPrice,
    pub total_quantity: u64,
    pub order_count: u32,
}

/// Immutable snapshot of the top of both sides of the book.
///
/// Reflects the state at the time of the call; it is not updated by later
/// mutations.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BookSnapshot {
    pub instrument: String,
    /// Bid levels, best (highest tick) first
    pub bids: Vec<LevelInfo>,
    /// Ask levels, best (lowest tick) first
    pub asks: Vec<LevelInfo>,
    /// Current spread in ticks (ask - bid)
    pub spread: Option<TickPrice>,
    /// Midpoint of the best bid and ask, in ticks
    pub mid_price: Option<TickPrice>,
}

impl BookSnapshot {
    pub fn with_depth(instrument: String, bids: Vec<LevelInfo>, asks: Vec<LevelInfo>) -> Self {
        let tops = match (bids.first(), asks.first()) {
            (Some(bid), Some(ask)) => Some((bid.price_tick, ask.price_tick)),
            _ => None,
        };

        let spread = tops.and_then(|(bid, ask)| ask.checked_sub(bid).ok());
        let mid_price = tops.map(|(bid, ask)| bid.midpoint(ask));

        Self {
            instrument,
            bids,
            asks,
            spread,
            mid_price,
        }
    }

    pub fn best_bid(&self) -> Option<TickPrice> {
        self.bids.first().map(|level| level.price_tick)
    }

    pub fn best_ask(&self) -> Option<TickPrice> {
        self.asks.first().map(|level| level.price_tick)
    }

    pub fn total_bid_quantity(&self) -> u64 {
        self.bids.iter().map(|level| level.total_quantity).sum()
    }

    pub fn total_ask_quantity(&self) -> u64 {
        self.asks.iter().map(|level| level.total_quantity).sum()
    }
}
