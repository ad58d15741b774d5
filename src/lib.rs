// ============================================================================
// Tickbook Library
// Price-time-priority limit order book with integer tick prices
// ============================================================================

//! # Tickbook
//!
//! A single-instrument limit order book with strict price-time priority.
//!
//! ## Features
//!
//! - **Integer tick prices** - all price comparisons are exact `i64`
//!   arithmetic; currency values exist only at the boundary
//! - **O(1) top-of-book** via cached best ticks, **O(1) cancellation** via a
//!   slab arena and intrusive per-level FIFO queues
//! - **Three time-in-force policies** - good-till-cancel, immediate-or-cancel
//!   and fill-or-kill with a non-mutating all-or-nothing preview
//! - **Single-writer discipline** - submissions are serialized behind one
//!   mutex, so fills and sequence numbers follow processing order
//!
//! ## Example
//!
//! ```rust
//! use tickbook::prelude::*;
//! use tickbook::numeric::TickPrice;
//!
//! let book = OrderBook::new(BookConfig::new("BTC-USD")).unwrap();
//! let mut fills = Vec::new();
//!
//! // Rest an ask, then cross it with an immediate-or-cancel buy
//! let price = TickPrice::from_currency(50_000).unwrap();
//! book.submit(
//!     Order::limit(1, Side::Sell, price, 10, TimeInForce::GoodTillCancel),
//!     &mut fills,
//! );
//! book.submit(
//!     Order::limit(2, Side::Buy, price, 4, TimeInForce::ImmediateOrCancel),
//!     &mut fills,
//! );
//!
//! assert_eq!(fills.len(), 1);
//! assert_eq!(fills[0].maker_id, OrderId::new(1));
//! assert_eq!(fills[0].quantity, 4);
//! assert_eq!(book.best_ask(), Some(50_000.0));
//! ```

pub mod book;
pub mod domain;
pub mod engine;
pub mod io;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::book::{BookSnapshot, LevelInfo};
    pub use crate::domain::{
        BookConfig, Fill, Order, OrderId, OrderKind, Side, TimeInForce,
    };
    pub use crate::engine::{BookStats, OrderBook, StatsSnapshot};
    pub use crate::numeric::{TickPrice, TICK_PRECISION};
}
