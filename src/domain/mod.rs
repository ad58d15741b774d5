// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod fill;
pub mod order;

pub use config::{BookConfig, DEFAULT_CAPACITY_HINT};
pub use fill::Fill;
pub use order::{Order, OrderId, OrderKind, Side, TimeInForce};
