// ============================================================================
// Fill Domain Model
// ============================================================================

use crate::numeric::TickPrice;

use super::OrderId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One matching event between an incoming (taker) and a resting (maker) order.
///
/// The price is always the maker's resting tick: price improvement accrues to
/// the taker. `seq` is assigned by the book and is strictly increasing across
/// the book's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fill {
    pub taker_id: OrderId,
    pub maker_id: OrderId,
    pub price_tick: TickPrice,
    pub quantity: u32,
    pub seq: u64,
}

impl Fill {
    pub fn new(
        taker_id: OrderId,
        maker_id: OrderId,
        price_tick: TickPrice,
        quantity: u32,
        seq: u64,
    ) -> Self {
        Self {
            taker_id,
            maker_id,
            price_tick,
            quantity,
            seq,
        }
    }
}
