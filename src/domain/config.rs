// ============================================================================
// Book Configuration
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of resting orders to reserve storage for.
pub const DEFAULT_CAPACITY_HINT: usize = 1024;

/// Configuration for creating an order book.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BookConfig {
    /// Instrument label (e.g. "BTC-USD", "AAPL"). Used for snapshots and
    /// logging only; the book itself is single-instrument.
    pub instrument: String,

    /// Expected number of simultaneously resting orders. Storage for order
    /// nodes is reserved up front so steady-state submissions do not grow
    /// the arena.
    pub capacity_hint: usize,
}

impl BookConfig {
    pub fn new(instrument: impl Into<String>) -> Self {
        Self {
            instrument: instrument.into(),
            capacity_hint: DEFAULT_CAPACITY_HINT,
        }
    }

    /// Builder method: set the resting-order capacity hint.
    pub fn with_capacity_hint(mut self, capacity_hint: usize) -> Self {
        self.capacity_hint = capacity_hint;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.instrument.is_empty() {
            return Err("Instrument cannot be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = BookConfig::new("BTC-USD");
        assert_eq!(config.instrument, "BTC-USD");
        assert_eq!(config.capacity_hint, DEFAULT_CAPACITY_HINT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = BookConfig::new("AAPL").with_capacity_hint(1_000_000);
        assert_eq!(config.capacity_hint, 1_000_000);
    }

    #[test]
    fn test_validation_rejects_empty_instrument() {
        assert!(BookConfig::new("").validate().is_err());
    }
}
