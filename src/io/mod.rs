// ============================================================================
// IO Module
// Boundary adapters for external order sources
// ============================================================================

pub mod csv;

pub use csv::{load_orders, load_orders_from_path, CsvError, CSV_HEADER};
