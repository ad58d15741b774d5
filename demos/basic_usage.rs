// ============================================================================
// Basic Usage Example
// ============================================================================

use tickbook::numeric::TickPrice;
use tickbook::prelude::*;

fn px(units: i64) -> TickPrice {
    TickPrice::from_ticks(units * TICK_PRECISION)
}

fn main() {
    println!("=== Tickbook Example ===\n");

    let book = OrderBook::new(BookConfig::new("BTC-USD")).unwrap();
    let mut fills = Vec::new();

    // Rest a bid and an ask
    println!("Placing GTC orders...");
    book.submit(
        Order::limit(1001, Side::Buy, px(1000), 50, TimeInForce::GoodTillCancel),
        &mut fills,
    );
    book.submit(
        Order::limit(1002, Side::Sell, px(1010), 30, TimeInForce::GoodTillCancel),
        &mut fills,
    );
    println!("  Best Bid: ${:.2}", book.best_bid().unwrap());
    println!("  Best Ask: ${:.2}", book.best_ask().unwrap());

    // IOC buy crosses the ask
    println!("\nSubmitting IOC buy for 20 @ $1010.00...");
    fills.clear();
    book.submit(
        Order::limit(1003, Side::Buy, px(1010), 20, TimeInForce::ImmediateOrCancel),
        &mut fills,
    );
    for fill in &fills {
        println!(
            "  Fill #{}: {} @ {} (maker {})",
            fill.seq, fill.quantity, fill.price_tick, fill.maker_id
        );
    }

    // FOK sell for more than the resting bid quantity is killed
    println!("\nSubmitting FOK sell for 60 @ $1000.00...");
    fills.clear();
    let accepted = book.submit(
        Order::limit(1004, Side::Sell, px(1000), 60, TimeInForce::FillOrKill),
        &mut fills,
    );
    println!("  Accepted: {} (fills: {})", accepted, fills.len());

    // Market buy sweeps what is left of the ask
    println!("\nSubmitting market buy for 15...");
    fills.clear();
    book.submit(Order::market(1005, Side::Buy, 15), &mut fills);
    for fill in &fills {
        println!("  Fill #{}: {} @ {}", fill.seq, fill.quantity, fill.price_tick);
    }
    println!(
        "  Best Ask after sweep: {:?} (residual discarded)",
        book.best_ask()
    );

    // Cancel the resting bid
    println!("\nCancelling order 1001...");
    println!("  Cancelled: {}", book.cancel(1001));
    println!("  Best Bid after cancel: {:?}", book.best_bid());

    // Level-2 view
    println!("\n=== Order Book Snapshot ===");
    let snapshot = book.snapshot(5);
    println!("Bids:");
    for level in &snapshot.bids {
        println!(
            "  {} x {} ({} orders)",
            level.price_tick, level.total_quantity, level.order_count
        );
    }
    println!("Asks:");
    for level in &snapshot.asks {
        println!(
            "  {} x {} ({} orders)",
            level.price_tick, level.total_quantity, level.order_count
        );
    }
    println!("Spread: {:?}", snapshot.spread);

    let stats = book.stats();
    println!("\nOrders Processed: {}", stats.orders_processed);
    println!("Fills Generated:  {}", stats.fills_generated);
}
