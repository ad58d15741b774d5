// ============================================================================
// Test Data Generator
// Creates CSV files with reproducible random orders
// ============================================================================

use std::fs::File;
use std::io::{BufWriter, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tickbook::io::CSV_HEADER;
use tickbook::numeric::TickPrice;

fn generate_csv(filename: &str, num_orders: usize) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    writeln!(file, "{CSV_HEADER}")?;

    // Fixed seed for reproducibility
    let mut rng = StdRng::seed_from_u64(12345);
    let sides = ["BUY", "SELL"];
    let tifs = ["GTC", "IOC", "FOK"];

    for _ in 0..num_orders {
        // $500.00 to $540.00 on the tick grid
        let price = TickPrice::from_ticks(rng.gen_range(50_000..=54_000));
        writeln!(
            file,
            "{},{},{},LIMIT,{}",
            sides[rng.gen_range(0..2)],
            price,
            rng.gen_range(10..=500),
            tifs[rng.gen_range(0..3)],
        )?;
    }

    file.flush()?;
    println!("Created {filename} with {num_orders} orders");
    Ok(())
}

fn main() -> std::io::Result<()> {
    println!("=== Generating CSV Test Files ===\n");

    generate_csv("orders_small.csv", 1_000)?;
    generate_csv("orders_medium.csv", 10_000)?;
    generate_csv("orders_large.csv", 100_000)?;

    println!("\nAll CSV files generated.");
    Ok(())
}
