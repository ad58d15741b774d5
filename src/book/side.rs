// ============================================================================
// Side Book
// Ordered price levels for one side, with a cached best tick
// ============================================================================

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use slab::Slab;

use crate::domain::Side;
use crate::numeric::TickPrice;

use super::level::{OrderNode, PriceLevel};
use super::snapshot::LevelInfo;

/// One side of the book: non-empty price levels keyed by tick.
///
/// The `BTreeMap` gives ordered iteration and O(log n) level insertion and
/// removal; the cached `best` entry makes top-of-book access O(1) instead of
/// an O(log n) hop on every marketability test. The cache is recomputed from
/// the adjacent map entry only when the best level empties out.
#[derive(Debug)]
pub(crate) struct SideBook {
    side: Side,
    /// tick -> slab key of the level in the shared level arena
    by_tick: BTreeMap<i64, usize>,
    /// Cached extremum: (tick, level slab key)
    best: Option<(i64, usize)>,
    /// Total remaining quantity resting on this side
    volume: u64,
}

impl SideBook {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            by_tick: BTreeMap::new(),
            best: None,
            volume: 0,
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Best (tick, level key): highest tick for Buy, lowest for Sell. O(1).
    #[inline]
    pub fn best(&self) -> Option<(TickPrice, usize)> {
        self.best.map(|(t, k)| (TickPrice::from_ticks(t), k))
    }

    #[inline]
    pub fn best_tick(&self) -> Option<TickPrice> {
        self.best.map(|(t, _)| TickPrice::from_ticks(t))
    }

    #[inline]
    pub fn volume(&self) -> u64 {
        self.volume
    }

    #[inline]
    pub fn level_count(&self) -> usize {
        self.by_tick.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_tick.is_empty()
    }

    /// Whether tick `a` has strictly better price priority than tick `b`.
    #[inline]
    fn outranks(&self, a: i64, b: i64) -> bool {
        match self.side {
            Side::Buy => a > b,
            Side::Sell => a < b,
        }
    }

    /// Enqueue the order node at its tick, creating the level if absent, and
    /// update the cached best and side volume.
    pub fn enqueue(
        &mut self,
        levels: &mut Slab<PriceLevel>,
        orders: &mut Slab<OrderNode>,
        key: usize,
    ) {
        let tick = orders[key].tick;
        let remaining = orders[key].remaining;

        let level_key = match self.by_tick.entry(tick.ticks()) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let level_key = levels.insert(PriceLevel::new(tick));
                entry.insert(level_key);
                level_key
            },
        };

        orders[key].level = level_key;
        levels[level_key].push_back(orders, key);
        self.volume += u64::from(remaining);

        let improves = match self.best {
            Some((best, _)) => self.outranks(tick.ticks(), best),
            None => true,
        };
        if improves {
            self.best = Some((tick.ticks(), level_key));
        }
    }

    /// Remove a (now empty) level and recompute the cached best from the
    /// adjacent map entry if the removed level was the best.
    pub fn remove_level(&mut self, levels: &mut Slab<PriceLevel>, tick: TickPrice) {
        let level_key = self
            .by_tick
            .remove(&tick.ticks())
            .expect("level to remove must be present in the side book");
        debug_assert!(levels[level_key].is_empty());
        levels.remove(level_key);

        if let Some((best, _)) = self.best {
            if best == tick.ticks() {
                self.best = match self.side {
                    Side::Buy => self.by_tick.iter().next_back(),
                    Side::Sell => self.by_tick.iter().next(),
                }
                .map(|(t, k)| (*t, *k));
            }
        }
    }

    /// Account for quantity leaving this side (fill or cancel).
    #[inline]
    pub fn subtract_volume(&mut self, quantity: u32) {
        self.volume -= u64::from(quantity);
    }

    /// Iterate levels in price-priority order: descending ticks for Buy,
    /// ascending for Sell.
    pub fn iter_priority(&self) -> Box<dyn Iterator<Item = (i64, usize)> + '_> {
        match self.side {
            Side::Buy => Box::new(self.by_tick.iter().rev().map(|(t, k)| (*t, *k))),
            Side::Sell => Box::new(self.by_tick.iter().map(|(t, k)| (*t, *k))),
        }
    }

    /// Panic if this side's structure is inconsistent: stale best cache,
    /// empty levels left in the map, level aggregates disagreeing with the
    /// queued orders, or a wrong incremental volume.
    pub fn check_consistency(&self, levels: &Slab<PriceLevel>, orders: &Slab<OrderNode>) {
        let expected_best = match self.side {
            Side::Buy => self.by_tick.iter().next_back(),
            Side::Sell => self.by_tick.iter().next(),
        }
        .map(|(t, k)| (*t, *k));
        assert_eq!(self.best, expected_best, "{:?} best cache is stale", self.side);

        let mut side_volume = 0u64;
        for (&tick, &level_key) in &self.by_tick {
            let level = &levels[level_key];
            assert!(!level.is_empty(), "empty level left at tick {tick}");
            assert_eq!(level.tick().ticks(), tick, "level keyed under wrong tick");

            let mut queued_quantity = 0u64;
            let mut queued_count = 0u32;
            let mut cursor = level.front();
            while let Some(key) = cursor {
                let node = &orders[key];
                assert_eq!(node.side, self.side, "order {} on wrong side", node.id);
                assert_eq!(node.tick.ticks(), tick, "order {} at wrong level", node.id);
                assert!(node.remaining > 0, "order {} with zero remaining", node.id);
                assert_eq!(node.level, level_key, "order {} back-link is stale", node.id);
                queued_quantity += u64::from(node.remaining);
                queued_count += 1;
                cursor = node.next;
            }
            assert_eq!(
                level.total_quantity(),
                queued_quantity,
                "level {tick} aggregate quantity mismatch"
            );
            assert_eq!(
                level.order_count(),
                queued_count,
                "level {tick} order count mismatch"
            );
            side_volume += queued_quantity;
        }
        assert_eq!(self.volume, side_volume, "{:?} side volume mismatch", self.side);
    }

    /// Up to `n` levels in price-priority order.
    pub fn top_levels(&self, levels: &Slab<PriceLevel>, n: usize) -> Vec<LevelInfo> {
        self.iter_priority()
            .take(n)
            .map(|(_, level_key)| {
                let level = &levels[level_key];
                LevelInfo {
                    price_tick: level.tick(),
                    total_quantity: level.total_quantity(),
                    order_count: level.order_count(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderId;

    struct Fixture {
        levels: Slab<PriceLevel>,
        orders: Slab<OrderNode>,
        book: SideBook,
    }

    impl Fixture {
        fn new(side: Side) -> Self {
            Self {
                levels: Slab::new(),
                orders: Slab::new(),
                book: SideBook::new(side),
            }
        }

        fn enqueue(&mut self, id: u64, tick: i64, remaining: u32) -> usize {
            let key = self.orders.insert(OrderNode::new(
                OrderId::new(id),
                self.book.side(),
                TickPrice::from_ticks(tick),
                remaining,
                usize::MAX,
            ));
            self.book.enqueue(&mut self.levels, &mut self.orders, key);
            key
        }
    }

    #[test]
    fn test_best_is_highest_for_buy() {
        let mut fx = Fixture::new(Side::Buy);
        fx.enqueue(1, 100_000, 10);
        fx.enqueue(2, 101_000, 10);
        fx.enqueue(3, 99_000, 10);

        assert_eq!(fx.book.best_tick(), Some(TickPrice::from_ticks(101_000)));
        assert_eq!(fx.book.volume(), 30);
        assert_eq!(fx.book.level_count(), 3);
    }

    #[test]
    fn test_best_is_lowest_for_sell() {
        let mut fx = Fixture::new(Side::Sell);
        fx.enqueue(1, 101_000, 10);
        fx.enqueue(2, 100_000, 10);

        assert_eq!(fx.book.best_tick(), Some(TickPrice::from_ticks(100_000)));
    }

    #[test]
    fn test_remove_best_level_recomputes_from_neighbour() {
        let mut fx = Fixture::new(Side::Buy);
        let best = fx.enqueue(1, 101_000, 10);
        fx.enqueue(2, 100_000, 10);

        let level_key = fx.orders[best].level;
        fx.levels[level_key].unlink(&mut fx.orders, best);
        fx.orders.remove(best);
        fx.book
            .remove_level(&mut fx.levels, TickPrice::from_ticks(101_000));

        assert_eq!(fx.book.best_tick(), Some(TickPrice::from_ticks(100_000)));
        assert_eq!(fx.book.level_count(), 1);
    }

    #[test]
    fn test_remove_last_level_empties_side() {
        let mut fx = Fixture::new(Side::Sell);
        let key = fx.enqueue(1, 100_000, 10);

        let level_key = fx.orders[key].level;
        fx.levels[level_key].unlink(&mut fx.orders, key);
        fx.orders.remove(key);
        fx.book
            .remove_level(&mut fx.levels, TickPrice::from_ticks(100_000));

        assert_eq!(fx.book.best_tick(), None);
        assert!(fx.book.is_empty());
    }

    #[test]
    fn test_top_levels_priority_order() {
        let mut fx = Fixture::new(Side::Buy);
        fx.enqueue(1, 100_000, 10);
        fx.enqueue(2, 102_000, 20);
        fx.enqueue(3, 101_000, 30);
        fx.enqueue(4, 102_000, 5);

        let top = fx.book.top_levels(&fx.levels, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].price_tick, TickPrice::from_ticks(102_000));
        assert_eq!(top[0].total_quantity, 25);
        assert_eq!(top[0].order_count, 2);
        assert_eq!(top[1].price_tick, TickPrice::from_ticks(101_000));
    }
}
