// ============================================================================
// Order Domain Model
// ============================================================================

use crate::numeric::TickPrice;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// Externally assigned order identifier.
///
/// Identifiers are allocated by the caller (loader, gateway, test harness);
/// the book only requires them to be unique among live orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct OrderId(u64);

impl OrderId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for OrderId {
    #[inline]
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// The side an incoming order matches against.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OrderKind {
    Limit,
    Market,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeInForce {
    /// Good Till Cancel - residual rests on the book until filled or cancelled
    GoodTillCancel,
    /// Immediate Or Cancel - fill what is marketable, discard the remainder
    ImmediateOrCancel,
    /// Fill Or Kill - fill the entire quantity immediately or do nothing
    FillOrKill,
}

// ============================================================================
// Order Submission Record
// ============================================================================

/// Immutable order descriptor as submitted to the book.
///
/// Field order follows the wire/log layout. `participant_tag` and `timestamp`
/// are carried as opaque metadata: queue priority is defined by arrival order
/// at the book, never by the timestamp field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    /// Resting price in ticks. Ignored for market orders.
    pub price_tick: TickPrice,
    /// Original quantity in lots. Zero is rejected at submission.
    pub quantity: u32,
    pub kind: OrderKind,
    pub tif: TimeInForce,
    pub participant_tag: u32,
    pub timestamp: u64,
}

impl Order {
    /// Create a limit order.
    pub fn limit(
        id: u64,
        side: Side,
        price_tick: TickPrice,
        quantity: u32,
        tif: TimeInForce,
    ) -> Self {
        Self {
            id: OrderId::new(id),
            side,
            price_tick,
            quantity,
            kind: OrderKind::Limit,
            tif,
            participant_tag: 0,
            timestamp: 0,
        }
    }

    /// Create a market order. The price field is a placeholder and the
    /// residual is always discarded, so the TIF is immediate-or-cancel.
    pub fn market(id: u64, side: Side, quantity: u32) -> Self {
        Self {
            id: OrderId::new(id),
            side,
            price_tick: TickPrice::ZERO,
            quantity,
            kind: OrderKind::Market,
            tif: TimeInForce::ImmediateOrCancel,
            participant_tag: 0,
            timestamp: 0,
        }
    }

    pub fn with_participant_tag(mut self, tag: u32) -> Self {
        self.participant_tag = tag;
        self
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[inline]
    pub fn is_market(&self) -> bool {
        matches!(self.kind, OrderKind::Market)
    }

    #[inline]
    pub fn is_limit(&self) -> bool {
        matches!(self.kind, OrderKind::Limit)
    }
}
