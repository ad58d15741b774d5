// ============================================================================
// CSV Replay Demo
// Replays an order file through the book and reports latency statistics
// ============================================================================

use std::time::Instant;

use tickbook::io::load_orders_from_path;
use tickbook::numeric::TickPrice;
use tickbook::prelude::*;

/// Seed the book with 50 bid and 50 ask levels around $520.00, the same
/// liquidity shape the generated order files trade against.
fn setup_market_liquidity(book: &OrderBook) {
    let mut fills = Vec::new();
    let mut id = 1u64;

    for i in 0..50i64 {
        // Bids $520.00 down to $515.10, asks $520.01 up to $524.91
        book.submit(
            Order::limit(
                id,
                Side::Buy,
                TickPrice::from_ticks(52_000 - i * 10),
                100 + i as u32 * 5,
                TimeInForce::GoodTillCancel,
            ),
            &mut fills,
        );
        id += 1;

        book.submit(
            Order::limit(
                id,
                Side::Sell,
                TickPrice::from_ticks(52_001 + i * 10),
                100 + i as u32 * 5,
                TimeInForce::GoodTillCancel,
            ),
            &mut fills,
        );
        id += 1;
    }
}

fn percentile(sorted: &[u64], p: f64) -> u64 {
    if sorted.is_empty() {
        return 0;
    }
    let rank = ((sorted.len() as f64) * p) as usize;
    sorted[rank.min(sorted.len() - 1)]
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "orders_small.csv".to_string());

    println!("=== Tickbook CSV Replay ===");
    println!("Generated: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("Input:     {path}\n");

    let orders = match load_orders_from_path(&path, 10_000) {
        Ok(orders) => orders,
        Err(err) => {
            eprintln!("Failed to load {path}: {err}");
            eprintln!("Run the generate_orders example first.");
            std::process::exit(1);
        },
    };

    if orders.is_empty() {
        eprintln!("{path} contains no orders.");
        std::process::exit(1);
    }

    let book = OrderBook::new(
        BookConfig::new("REPLAY").with_capacity_hint(orders.len() + 128),
    )
    .unwrap();
    setup_market_liquidity(&book);

    let mut fills = Vec::new();
    let mut accepted = 0usize;
    let mut latencies = Vec::with_capacity(orders.len());
    let total = orders.len();

    let start = Instant::now();
    for order in orders {
        let order_start = Instant::now();
        if book.submit(order, &mut fills) {
            accepted += 1;
        }
        latencies.push(order_start.elapsed().as_nanos() as u64);
    }
    let elapsed = start.elapsed();

    book.assert_invariants();
    latencies.sort_unstable();

    let total_ns: u64 = latencies.iter().sum();
    let avg_ns = total_ns as f64 / latencies.len() as f64;

    println!("Orders Replayed:  {total}");
    println!("Orders Accepted:  {accepted}");
    println!("Fills Generated:  {}", fills.len());
    println!("Total Time:       {:.3} ms", elapsed.as_secs_f64() * 1_000.0);
    println!("Avg Latency:      {avg_ns:.0} ns");
    println!("Min Latency:      {} ns", latencies.first().unwrap());
    println!("Median Latency:   {} ns", percentile(&latencies, 0.50));
    println!("p95 Latency:      {} ns", percentile(&latencies, 0.95));
    println!("p99 Latency:      {} ns", percentile(&latencies, 0.99));
    println!("Max Latency:      {} ns", latencies.last().unwrap());
    println!(
        "Throughput:       {:.0} orders/sec",
        total as f64 / elapsed.as_secs_f64()
    );

    println!("\n=== Final Book State ===");
    println!("Best Bid:      {:?}", book.best_bid());
    println!("Best Ask:      {:?}", book.best_ask());
    println!("Resting Orders: {}", book.order_count());
    let stats = book.stats();
    println!("Orders Processed: {}", stats.orders_processed);
    println!("Fills Generated:  {}", stats.fills_generated);
}
