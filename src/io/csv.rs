// ============================================================================
// CSV Order Loader
// Ingest boundary for SIDE,PRICE,QUANTITY,TYPE,TIF order files
// ============================================================================

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::{Order, Side, TimeInForce};
use crate::numeric::{NumericError, TickPrice};

/// Expected header line.
pub const CSV_HEADER: &str = "SIDE,PRICE,QUANTITY,TYPE,TIF";

/// Errors produced while loading an order file. Line numbers are 1-based and
/// include the header line.
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("i/o error reading orders: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing or malformed header, expected \"SIDE,PRICE,QUANTITY,TYPE,TIF\"")]
    BadHeader,

    #[error("line {line}: expected 5 fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: unknown side {value:?}")]
    BadSide { line: usize, value: String },

    #[error("line {line}: bad price {value:?}")]
    BadPrice {
        line: usize,
        value: String,
        #[source]
        source: NumericError,
    },

    #[error("line {line}: bad quantity {value:?}")]
    BadQuantity { line: usize, value: String },

    #[error("line {line}: unsupported order type {value:?}")]
    BadKind { line: usize, value: String },

    #[error("line {line}: unknown time-in-force {value:?}")]
    BadTif { line: usize, value: String },
}

/// Load limit orders from CSV, assigning ids sequentially from `first_id`.
///
/// The file format carries no identifiers; rows are `BUY|SELL`, a decimal
/// price (converted to ticks exactly, sub-tick prices are errors), a positive
/// integer quantity, `LIMIT`, and `GTC|IOC|FOK`. Blank lines are skipped.
pub fn load_orders<R: BufRead>(reader: R, first_id: u64) -> Result<Vec<Order>, CsvError> {
    let mut lines = reader.lines();

    let header = lines.next().ok_or(CsvError::BadHeader)??;
    if header.trim() != CSV_HEADER {
        return Err(CsvError::BadHeader);
    }

    let mut orders = Vec::new();
    let mut next_id = first_id;

    for (index, line) in lines.enumerate() {
        let line_no = index + 2;
        let line = line?;
        let row = line.trim();
        if row.is_empty() {
            continue;
        }

        orders.push(parse_row(row, line_no, next_id)?);
        next_id += 1;
    }

    Ok(orders)
}

/// Open `path` and load its orders. See [`load_orders`].
pub fn load_orders_from_path(
    path: impl AsRef<Path>,
    first_id: u64,
) -> Result<Vec<Order>, CsvError> {
    let file = File::open(path)?;
    load_orders(BufReader::new(file), first_id)
}

fn parse_row(row: &str, line: usize, id: u64) -> Result<Order, CsvError> {
    let fields: Vec<&str> = row.split(',').map(str::trim).collect();
    if fields.len() != 5 {
        return Err(CsvError::FieldCount {
            line,
            found: fields.len(),
        });
    }

    let side = match fields[0] {
        "BUY" => Side::Buy,
        "SELL" => Side::Sell,
        other => {
            return Err(CsvError::BadSide {
                line,
                value: other.to_string(),
            })
        },
    };

    let price = Decimal::from_str(fields[1])
        .map_err(|_| CsvError::BadPrice {
            line,
            value: fields[1].to_string(),
            source: NumericError::InvalidInput,
        })
        .and_then(|decimal| {
            TickPrice::from_decimal(decimal).map_err(|source| CsvError::BadPrice {
                line,
                value: fields[1].to_string(),
                source,
            })
        })?;

    let quantity: u32 = fields[2].parse().map_err(|_| CsvError::BadQuantity {
        line,
        value: fields[2].to_string(),
    })?;
    if quantity == 0 {
        return Err(CsvError::BadQuantity {
            line,
            value: fields[2].to_string(),
        });
    }

    // The format carries a price on every row, so only limit orders exist here
    if fields[3] != "LIMIT" {
        return Err(CsvError::BadKind {
            line,
            value: fields[3].to_string(),
        });
    }

    let tif = match fields[4] {
        "GTC" => TimeInForce::GoodTillCancel,
        "IOC" => TimeInForce::ImmediateOrCancel,
        "FOK" => TimeInForce::FillOrKill,
        other => {
            return Err(CsvError::BadTif {
                line,
                value: other.to_string(),
            })
        },
    };

    Ok(Order::limit(id, side, price, quantity, tif))
}
