// ============================================================================
// Book Core
// Single-writer book state: validation, FOK preview, matching kernel,
// residual disposition, cancellation and queries
// ============================================================================

use std::collections::HashMap;

use slab::Slab;
use tracing::debug;

use crate::book::level::{OrderNode, PriceLevel};
use crate::book::side::SideBook;
use crate::book::{BookSnapshot, LevelInfo};
use crate::domain::{Fill, Order, OrderId, Side, TimeInForce};
use crate::numeric::TickPrice;

/// The book proper: two side books over shared order/level arenas, plus the
/// id index used for O(1) cancellation.
///
/// All methods assume exclusive access; the public [`OrderBook`] wrapper
/// serializes callers behind a mutex.
///
/// [`OrderBook`]: crate::engine::OrderBook
#[derive(Debug)]
pub(crate) struct BookCore {
    bids: SideBook,
    asks: SideBook,
    /// Arena of resting orders; slab keys stay valid until removal, so the
    /// index handles survive unrelated mutations.
    orders: Slab<OrderNode>,
    /// Arena of live price levels, shared by both sides
    levels: Slab<PriceLevel>,
    /// id -> order slab key
    index: HashMap<OrderId, usize>,
    /// Next fill sequence number, strictly increasing from 1
    next_fill_seq: u64,
}

/// True if the incoming order may trade at the opposing best tick.
#[inline]
fn marketable(incoming: &Order, best: TickPrice) -> bool {
    if incoming.is_market() {
        return true;
    }
    match incoming.side {
        Side::Buy => incoming.price_tick >= best,
        Side::Sell => incoming.price_tick <= best,
    }
}

impl BookCore {
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self {
            bids: SideBook::new(Side::Buy),
            asks: SideBook::new(Side::Sell),
            orders: Slab::with_capacity(capacity_hint),
            levels: Slab::with_capacity(capacity_hint.min(4096)),
            index: HashMap::with_capacity(capacity_hint),
            next_fill_seq: 1,
        }
    }

    // ========================================================================
    // Submission
    // ========================================================================

    /// Match an incoming order against the book, appending fills to
    /// `out_fills`. Returns false when the submission is rejected (invalid
    /// order, or unfillable fill-or-kill); rejected submissions mutate
    /// nothing.
    pub fn submit(&mut self, order: &Order, out_fills: &mut Vec<Fill>) -> bool {
        if order.quantity == 0 {
            debug!(id = order.id.as_u64(), "rejected order: zero quantity");
            return false;
        }
        if self.index.contains_key(&order.id) {
            debug!(id = order.id.as_u64(), "rejected order: duplicate id");
            return false;
        }
        if order.is_limit() && !order.price_tick.is_positive() {
            debug!(
                id = order.id.as_u64(),
                price_tick = order.price_tick.ticks(),
                "rejected limit order: non-positive price"
            );
            return false;
        }

        if order.tif == TimeInForce::FillOrKill && !self.fok_fillable(order) {
            debug!(
                id = order.id.as_u64(),
                quantity = order.quantity,
                "fill-or-kill unfillable, book untouched"
            );
            return false;
        }

        let mut remaining = order.quantity;
        self.match_incoming(order, &mut remaining, out_fills);

        if remaining > 0 {
            if order.is_market() {
                // Market residuals are discarded regardless of TIF
                debug!(
                    id = order.id.as_u64(),
                    discarded = remaining,
                    "market order exhausted opposing liquidity"
                );
            } else {
                match order.tif {
                    TimeInForce::GoodTillCancel => self.rest(order, remaining),
                    TimeInForce::ImmediateOrCancel => {},
                    TimeInForce::FillOrKill => {
                        unreachable!("fill-or-kill preview guarantees a full fill")
                    },
                }
            }
        }

        true
    }

    /// Price-time-priority match loop.
    ///
    /// Consumes the opposing best level head-first while the incoming order
    /// is marketable and has residual quantity. Fill price is always the
    /// maker's resting tick. No allocation per match step: fills go straight
    /// into the caller's buffer and emptied nodes return to the arena.
    fn match_incoming(&mut self, incoming: &Order, remaining: &mut u32, out_fills: &mut Vec<Fill>) {
        // Split borrows: opposing side, arenas and index are disjoint fields
        let opposite = match incoming.side {
            Side::Buy => &mut self.asks,
            Side::Sell => &mut self.bids,
        };
        let orders = &mut self.orders;
        let levels = &mut self.levels;
        let index = &mut self.index;

        while *remaining > 0 {
            let Some((best_tick, level_key)) = opposite.best() else {
                break;
            };
            if !marketable(incoming, best_tick) {
                break;
            }

            let maker_key = levels[level_key]
                .front()
                .expect("best level must hold at least one order");
            let maker = &mut orders[maker_key];
            let quantity = (*remaining).min(maker.remaining);

            out_fills.push(Fill::new(
                incoming.id,
                maker.id,
                maker.tick,
                quantity,
                self.next_fill_seq,
            ));
            self.next_fill_seq += 1;

            maker.remaining -= quantity;
            *remaining -= quantity;
            levels[level_key].reduce(quantity);
            opposite.subtract_volume(quantity);

            if maker.remaining == 0 {
                levels[level_key].unlink(orders, maker_key);
                let node = orders.remove(maker_key);
                index.remove(&node.id);
                if levels[level_key].is_empty() {
                    opposite.remove_level(levels, node.tick);
                }
            }
        }
    }

    /// Non-mutating fill-or-kill preview: walk the opposing side in price
    /// priority, summing aggregate level quantity at marketable ticks, until
    /// the incoming quantity is covered or marketable liquidity runs out.
    fn fok_fillable(&self, order: &Order) -> bool {
        let opposite = match order.side {
            Side::Buy => &self.asks,
            Side::Sell => &self.bids,
        };

        let mut needed = u64::from(order.quantity);
        for (tick, level_key) in opposite.iter_priority() {
            if !marketable(order, TickPrice::from_ticks(tick)) {
                break;
            }
            needed = needed.saturating_sub(self.levels[level_key].total_quantity());
            if needed == 0 {
                return true;
            }
        }
        needed == 0
    }

    /// Rest a good-till-cancel residual on its own side.
    fn rest(&mut self, order: &Order, remaining: u32) {
        let key = self.orders.insert(OrderNode::new(
            order.id,
            order.side,
            order.price_tick,
            remaining,
            usize::MAX,
        ));

        let own = match order.side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        own.enqueue(&mut self.levels, &mut self.orders, key);
        self.index.insert(order.id, key);

        // A resting residual can never cross: it only rests because the
        // opposing best was not marketable. A crossed book here is corruption.
        if let (Some(bid), Some(ask)) = (self.bids.best_tick(), self.asks.best_tick()) {
            assert!(bid < ask, "crossed book after rest: bid {bid} >= ask {ask}");
        }
    }

    // ========================================================================
    // Cancellation
    // ========================================================================

    /// Remove a resting order by id. Returns false for unknown ids,
    /// including orders already fully filled.
    pub fn cancel(&mut self, id: OrderId) -> bool {
        let Some(key) = self.index.remove(&id) else {
            return false;
        };

        let level_key = self.orders[key].level;
        self.levels[level_key].unlink(&mut self.orders, key);
        let node = self.orders.remove(key);

        let own = match node.side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        own.subtract_volume(node.remaining);
        if self.levels[level_key].is_empty() {
            own.remove_level(&mut self.levels, node.tick);
        }

        true
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[inline]
    pub fn best_bid_tick(&self) -> Option<TickPrice> {
        self.bids.best_tick()
    }

    #[inline]
    pub fn best_ask_tick(&self) -> Option<TickPrice> {
        self.asks.best_tick()
    }

    pub fn top_levels(&self, side: Side, n: usize) -> Vec<LevelInfo> {
        match side {
            Side::Buy => self.bids.top_levels(&self.levels, n),
            Side::Sell => self.asks.top_levels(&self.levels, n),
        }
    }

    pub fn snapshot(&self, instrument: &str, depth: usize) -> BookSnapshot {
        BookSnapshot::with_depth(
            instrument.to_string(),
            self.bids.top_levels(&self.levels, depth),
            self.asks.top_levels(&self.levels, depth),
        )
    }

    /// Number of resting orders across both sides.
    #[inline]
    pub fn order_count(&self) -> usize {
        self.index.len()
    }

    /// Total resting quantity on one side.
    #[inline]
    pub fn total_volume(&self, side: Side) -> u64 {
        match side {
            Side::Buy => self.bids.volume(),
            Side::Sell => self.asks.volume(),
        }
    }

    /// Whether an id is currently resting on the book.
    #[inline]
    pub fn contains(&self, id: OrderId) -> bool {
        self.index.contains_key(&id)
    }

    // ========================================================================
    // Consistency checking
    // ========================================================================

    /// Panic if any structural invariant is violated. Exercised by tests;
    /// also callable from debug tooling via `OrderBook::assert_invariants`.
    pub fn assert_invariants(&self) {
        self.bids.check_consistency(&self.levels, &self.orders);
        self.asks.check_consistency(&self.levels, &self.orders);

        assert_eq!(
            self.index.len(),
            self.orders.len(),
            "order index and arena disagree on live order count"
        );
        for (id, &key) in &self.index {
            let node = self
                .orders
                .get(key)
                .unwrap_or_else(|| panic!("index entry {id} points at a vacant arena slot"));
            assert_eq!(node.id, *id, "index entry {id} points at order {}", node.id);
        }

        if let (Some(bid), Some(ask)) = (self.bids.best_tick(), self.asks.best_tick()) {
            assert!(bid < ask, "crossed book: bid {bid} >= ask {ask}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::TICK_PRECISION;

    fn px(units: i64) -> TickPrice {
        TickPrice::from_ticks(units * TICK_PRECISION)
    }

    fn gtc(id: u64, side: Side, price_units: i64, quantity: u32) -> Order {
        Order::limit(id, side, px(price_units), quantity, TimeInForce::GoodTillCancel)
    }

    fn submit(core: &mut BookCore, order: Order) -> (bool, Vec<Fill>) {
        let mut fills = Vec::new();
        let accepted = core.submit(&order, &mut fills);
        core.assert_invariants();
        (accepted, fills)
    }

    #[test]
    fn test_non_marketable_limit_rests() {
        let mut core = BookCore::with_capacity(16);
        let (accepted, fills) = submit(&mut core, gtc(1, Side::Buy, 1000, 50));

        assert!(accepted);
        assert!(fills.is_empty());
        assert_eq!(core.best_bid_tick(), Some(px(1000)));
        assert_eq!(core.order_count(), 1);
        assert_eq!(core.total_volume(Side::Buy), 50);
    }

    #[test]
    fn test_price_time_priority_within_level() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Sell, 1010, 10));
        submit(&mut core, gtc(2, Side::Sell, 1010, 10));

        let (_, fills) = submit(&mut core, gtc(3, Side::Buy, 1010, 15));
        assert_eq!(fills.len(), 2);
        // Oldest resting order first
        assert_eq!(fills[0].maker_id, OrderId::new(1));
        assert_eq!(fills[0].quantity, 10);
        assert_eq!(fills[1].maker_id, OrderId::new(2));
        assert_eq!(fills[1].quantity, 5);
    }

    #[test]
    fn test_best_price_consumed_first() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Sell, 1012, 10));
        submit(&mut core, gtc(2, Side::Sell, 1010, 10));
        submit(&mut core, gtc(3, Side::Sell, 1011, 10));

        let (_, fills) = submit(&mut core, gtc(4, Side::Buy, 1012, 30));
        let makers: Vec<u64> = fills.iter().map(|f| f.maker_id.as_u64()).collect();
        assert_eq!(makers, vec![2, 3, 1]);
        assert_eq!(core.best_ask_tick(), None);
    }

    #[test]
    fn test_fill_price_is_maker_price() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Sell, 1005, 10));

        // Aggressive buy at 1010 trades at the resting 1005
        let (_, fills) = submit(&mut core, gtc(2, Side::Buy, 1010, 10));
        assert_eq!(fills[0].price_tick, px(1005));
    }

    #[test]
    fn test_fill_sequence_strictly_increasing() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Sell, 1010, 5));
        submit(&mut core, gtc(2, Side::Sell, 1011, 5));

        let (_, first) = submit(&mut core, gtc(3, Side::Buy, 1011, 10));
        assert_eq!(first[0].seq, 1);
        assert_eq!(first[1].seq, 2);

        submit(&mut core, gtc(4, Side::Sell, 1010, 5));
        let (_, second) = submit(&mut core, gtc(5, Side::Buy, 1010, 5));
        assert_eq!(second[0].seq, 3);
    }

    #[test]
    fn test_marketable_at_equality() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Sell, 1010, 10));

        let (_, fills) = submit(&mut core, gtc(2, Side::Buy, 1010, 10));
        assert_eq!(fills.len(), 1);
    }

    #[test]
    fn test_one_tick_away_does_not_match() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Sell, 1010, 10));

        let one_tick_below = TickPrice::from_ticks(1010 * TICK_PRECISION - 1);
        let buy = Order::limit(2, Side::Buy, one_tick_below, 10, TimeInForce::GoodTillCancel);
        let (accepted, fills) = submit(&mut core, buy);

        assert!(accepted);
        assert!(fills.is_empty());
        assert_eq!(core.order_count(), 2);
    }

    #[test]
    fn test_gtc_partial_fill_rests_residual() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Sell, 1010, 30));

        let (_, fills) = submit(&mut core, gtc(2, Side::Buy, 1010, 50));
        assert_eq!(fills.len(), 1);
        assert_eq!(fills[0].quantity, 30);
        assert_eq!(core.best_bid_tick(), Some(px(1010)));
        assert_eq!(core.total_volume(Side::Buy), 20);
        assert_eq!(core.best_ask_tick(), None);
    }

    #[test]
    fn test_ioc_residual_discarded() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Sell, 1010, 30));

        let ioc = Order::limit(2, Side::Buy, px(1010), 50, TimeInForce::ImmediateOrCancel);
        let (accepted, fills) = submit(&mut core, ioc);

        assert!(accepted);
        assert_eq!(fills.len(), 1);
        assert_eq!(core.order_count(), 0);
        assert_eq!(core.best_bid_tick(), None);
    }

    #[test]
    fn test_ioc_no_liquidity_is_noop() {
        let mut core = BookCore::with_capacity(16);
        let ioc = Order::limit(1, Side::Buy, px(1000), 10, TimeInForce::ImmediateOrCancel);
        let (accepted, fills) = submit(&mut core, ioc);

        assert!(accepted);
        assert!(fills.is_empty());
        assert_eq!(core.order_count(), 0);
    }

    #[test]
    fn test_fok_rejected_when_underfilled() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Buy, 1000, 50));

        let fok = Order::limit(2, Side::Sell, px(1000), 60, TimeInForce::FillOrKill);
        let (accepted, fills) = submit(&mut core, fok);

        assert!(!accepted);
        assert!(fills.is_empty());
        // Book bitwise-identical: nothing consumed
        assert_eq!(core.best_bid_tick(), Some(px(1000)));
        assert_eq!(core.total_volume(Side::Buy), 50);
    }

    #[test]
    fn test_fok_fills_across_levels() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Sell, 1010, 30));
        submit(&mut core, gtc(2, Side::Sell, 1011, 30));
        submit(&mut core, gtc(3, Side::Sell, 1020, 100));

        // 60 available at <= 1011, exactly covering the order
        let fok = Order::limit(4, Side::Buy, px(1011), 60, TimeInForce::FillOrKill);
        let (accepted, fills) = submit(&mut core, fok);

        assert!(accepted);
        assert_eq!(fills.len(), 2);
        assert_eq!(fills.iter().map(|f| u64::from(f.quantity)).sum::<u64>(), 60);
        assert_eq!(core.best_ask_tick(), Some(px(1020)));
    }

    #[test]
    fn test_fok_ignores_non_marketable_liquidity() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Sell, 1010, 30));
        submit(&mut core, gtc(2, Side::Sell, 1020, 100));

        // Plenty of volume, but only 30 at <= 1010
        let fok = Order::limit(3, Side::Buy, px(1010), 40, TimeInForce::FillOrKill);
        let (accepted, fills) = submit(&mut core, fok);

        assert!(!accepted);
        assert!(fills.is_empty());
        assert_eq!(core.total_volume(Side::Sell), 130);
    }

    #[test]
    fn test_market_sweeps_and_discards_residual() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Sell, 1010, 10));
        submit(&mut core, gtc(2, Side::Sell, 1020, 10));

        let (accepted, fills) = submit(&mut core, Order::market(3, Side::Buy, 25));
        assert!(accepted);
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[0].price_tick, px(1010));
        assert_eq!(fills[1].price_tick, px(1020));
        assert_eq!(core.best_ask_tick(), None);
        assert_eq!(core.order_count(), 0);
    }

    #[test]
    fn test_market_against_empty_book_accepted() {
        let mut core = BookCore::with_capacity(16);
        let (accepted, fills) = submit(&mut core, Order::market(1, Side::Buy, 15));

        assert!(accepted);
        assert!(fills.is_empty());
        assert_eq!(core.order_count(), 0);
    }

    #[test]
    fn test_rejects_zero_quantity() {
        let mut core = BookCore::with_capacity(16);
        let (accepted, fills) = submit(&mut core, gtc(1, Side::Buy, 1000, 0));
        assert!(!accepted);
        assert!(fills.is_empty());
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Buy, 1000, 50));

        let (accepted, _) = submit(&mut core, gtc(1, Side::Buy, 999, 50));
        assert!(!accepted);
        assert_eq!(core.order_count(), 1);
        assert_eq!(core.total_volume(Side::Buy), 50);
    }

    #[test]
    fn test_rejects_non_positive_limit_price() {
        let mut core = BookCore::with_capacity(16);
        let zero = Order::limit(1, Side::Buy, TickPrice::ZERO, 10, TimeInForce::GoodTillCancel);
        let negative = Order::limit(
            2,
            Side::Sell,
            TickPrice::from_ticks(-100),
            10,
            TimeInForce::GoodTillCancel,
        );

        assert!(!submit(&mut core, zero).0);
        assert!(!submit(&mut core, negative).0);
        assert_eq!(core.order_count(), 0);
    }

    #[test]
    fn test_cancel_resting_order() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Buy, 1000, 50));

        assert!(core.cancel(OrderId::new(1)));
        core.assert_invariants();
        assert_eq!(core.best_bid_tick(), None);
        assert_eq!(core.order_count(), 0);
        assert_eq!(core.total_volume(Side::Buy), 0);
    }

    #[test]
    fn test_cancel_unknown_id() {
        let mut core = BookCore::with_capacity(16);
        assert!(!core.cancel(OrderId::new(42)));
    }

    #[test]
    fn test_cancel_filled_order_is_noop() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Sell, 1010, 10));
        submit(&mut core, gtc(2, Side::Buy, 1010, 10));

        // Fully filled: id 1 is no longer indexed
        assert!(!core.cancel(OrderId::new(1)));
    }

    #[test]
    fn test_cancel_mid_queue_preserves_fifo() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Sell, 1010, 10));
        submit(&mut core, gtc(2, Side::Sell, 1010, 10));
        submit(&mut core, gtc(3, Side::Sell, 1010, 10));

        assert!(core.cancel(OrderId::new(2)));
        core.assert_invariants();

        let (_, fills) = submit(&mut core, gtc(4, Side::Buy, 1010, 20));
        let makers: Vec<u64> = fills.iter().map(|f| f.maker_id.as_u64()).collect();
        assert_eq!(makers, vec![1, 3]);
    }

    #[test]
    fn test_cancel_keeps_other_level_orders() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Buy, 1000, 10));
        submit(&mut core, gtc(2, Side::Buy, 1000, 20));

        assert!(core.cancel(OrderId::new(1)));
        core.assert_invariants();
        assert_eq!(core.best_bid_tick(), Some(px(1000)));
        assert_eq!(core.total_volume(Side::Buy), 20);

        let top = core.top_levels(Side::Buy, 1);
        assert_eq!(top[0].total_quantity, 20);
        assert_eq!(top[0].order_count, 1);
    }

    #[test]
    fn test_reused_id_after_removal_is_accepted() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Buy, 1000, 50));
        assert!(core.cancel(OrderId::new(1)));

        let (accepted, _) = submit(&mut core, gtc(1, Side::Buy, 1001, 25));
        assert!(accepted);
        assert_eq!(core.best_bid_tick(), Some(px(1001)));
    }

    #[test]
    fn test_top_levels_reports_aggregates() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Sell, 1010, 10));
        submit(&mut core, gtc(2, Side::Sell, 1010, 15));
        submit(&mut core, gtc(3, Side::Sell, 1012, 20));

        let top = core.top_levels(Side::Sell, 5);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].price_tick, px(1010));
        assert_eq!(top[0].total_quantity, 25);
        assert_eq!(top[0].order_count, 2);
        assert_eq!(top[1].price_tick, px(1012));
    }

    #[test]
    fn test_quantity_conservation() {
        let mut core = BookCore::with_capacity(64);
        let mut submitted = 0u64;
        let mut filled = 0u64;
        let mut discarded = 0u64;

        let orders = [
            gtc(1, Side::Buy, 1000, 50),
            gtc(2, Side::Sell, 1010, 30),
            Order::limit(3, Side::Buy, px(1010), 20, TimeInForce::ImmediateOrCancel),
            Order::market(4, Side::Buy, 15),
            gtc(5, Side::Sell, 1005, 40),
        ];

        for order in orders {
            let mut fills = Vec::new();
            if core.submit(&order, &mut fills) {
                submitted += u64::from(order.quantity);
                let matched: u64 = fills.iter().map(|f| u64::from(f.quantity)).sum();
                filled += matched;
                let residual = u64::from(order.quantity) - matched;
                let rests = order.is_limit()
                    && order.tif == TimeInForce::GoodTillCancel
                    && residual > 0;
                if !rests {
                    discarded += residual;
                }
            }
            core.assert_invariants();
        }

        let resting = core.total_volume(Side::Buy) + core.total_volume(Side::Sell);
        // Each matched lot consumes one submitted lot from each side
        assert_eq!(submitted, 2 * filled + resting + discarded);
    }

    #[test]
    #[should_panic(expected = "crossed book")]
    fn test_invariant_checker_detects_crossed_book() {
        let mut core = BookCore::with_capacity(16);
        submit(&mut core, gtc(1, Side::Buy, 1000, 10));
        // Force a crossed state by resting directly, bypassing matching
        let ask = Order::limit(2, Side::Sell, px(999), 10, TimeInForce::GoodTillCancel);
        core.rest(&ask, 10);
    }

    #[test]
    fn test_market_zero_price_not_rejected() {
        let mut core = BookCore::with_capacity(16);
        // Market orders carry a zero price placeholder; the non-positive
        // price check applies to limit orders only
        let market = Order::market(1, Side::Sell, 10);
        assert_eq!(market.price_tick, TickPrice::ZERO);
        let (accepted, _) = submit(&mut core, market);
        assert!(accepted);
    }
}
