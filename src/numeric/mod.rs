// ============================================================================
// Numeric Module
// Exact tick-grid price arithmetic
// ============================================================================

mod errors;
mod tick;

pub use errors::{NumericError, NumericResult};
pub use tick::{TickPrice, TICK_DECIMALS, TICK_PRECISION};
