// ============================================================================
// Tick Price
// Exact integer price arithmetic on a fixed tick grid
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of ticks in one currency unit.
///
/// Fixed at build time; every externally visible price is converted to and
/// from ticks at the API boundary, and the engine itself only ever compares
/// and adds `i64` tick counts.
pub const TICK_PRECISION: i64 = 100;

/// Decimal digits covered by [`TICK_PRECISION`] (10^TICK_DECIMALS == TICK_PRECISION).
pub const TICK_DECIMALS: u32 = 2;

/// A price expressed as a signed number of ticks.
///
/// Internally stores `currency_value × TICK_PRECISION` as an `i64`, so price
/// comparisons and arithmetic are exact. Currency values (`f64`, decimal
/// strings) exist only at the presentation and ingest boundaries.
///
/// # Example
/// ```
/// use tickbook::numeric::{TickPrice, TICK_PRECISION};
///
/// let px: TickPrice = "1010.50".parse().unwrap();
/// assert_eq!(px.ticks(), 101_050);
/// assert_eq!(px.to_currency(), 1010.50);
/// assert_eq!(TickPrice::from_currency(1010).unwrap().ticks(), 1010 * TICK_PRECISION);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct TickPrice(i64);

impl TickPrice {
    /// Zero ticks. Not a legal resting price; used as the placeholder price
    /// of market orders.
    pub const ZERO: Self = Self(0);

    /// Maximum representable price
    pub const MAX: Self = Self(i64::MAX);

    /// Minimum representable price
    pub const MIN: Self = Self(i64::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw tick count.
    #[inline]
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    /// Create from a whole number of currency units.
    ///
    /// # Errors
    /// Returns `Overflow` if `units × TICK_PRECISION` exceeds the i64 range.
    #[inline]
    pub fn from_currency(units: i64) -> NumericResult<Self> {
        units
            .checked_mul(TICK_PRECISION)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Convert a decimal currency value to ticks.
    ///
    /// This is the ingest-boundary conversion (CSV prices, user input). The
    /// value must land exactly on the tick grid; `$10.005` is a
    /// `PrecisionLoss`, not a rounding candidate.
    pub fn from_decimal(value: Decimal) -> NumericResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        let scaled = value
            .checked_mul(Decimal::from(TICK_PRECISION))
            .ok_or(NumericError::Overflow)?;

        if scaled.fract() != Decimal::ZERO {
            return Err(NumericError::PrecisionLoss);
        }

        scaled.to_i64().map(Self).ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The raw tick count.
    #[inline]
    pub const fn ticks(self) -> i64 {
        self.0
    }

    /// Currency value for presentation. Never used in engine comparisons.
    #[inline]
    pub fn to_currency(self) -> f64 {
        self.0 as f64 / TICK_PRECISION as f64
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Checked tick addition.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 > 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Checked tick subtraction.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or_else(|| {
            if rhs.0 < 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    /// Midpoint of two prices, truncated toward zero.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        Self((self.0 + other.0) / 2)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for TickPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TickPrice({}, raw={})", self, self.0)
    }
}

impl fmt::Display for TickPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int_part = self.0 / TICK_PRECISION;
        let frac_part = (self.0 % TICK_PRECISION).unsigned_abs();

        if self.0 < 0 && int_part == 0 {
            write!(f, "-0.{:0>width$}", frac_part, width = TICK_DECIMALS as usize)
        } else {
            write!(
                f,
                "{}.{:0>width$}",
                int_part,
                frac_part,
                width = TICK_DECIMALS as usize
            )
        }
    }
}

// ============================================================================
// String Parsing (ingest boundary)
// ============================================================================

impl FromStr for TickPrice {
    type Err = NumericError;

    /// Parse a decimal currency string into ticks.
    ///
    /// # Examples
    /// - "1000" -> 100000 ticks
    /// - "1010.50" -> 101050 ticks
    /// - "10.005" -> PrecisionLoss
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim()).map_err(|_| NumericError::InvalidInput)?;
        Self::from_decimal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_constant() {
        // TICK_DECIMALS and TICK_PRECISION must agree
        assert_eq!(10i64.pow(TICK_DECIMALS), TICK_PRECISION);
    }

    #[test]
    fn test_from_currency() {
        let px = TickPrice::from_currency(1000).unwrap();
        assert_eq!(px.ticks(), 100_000);
        assert_eq!(px.to_currency(), 1000.0);
    }

    #[test]
    fn test_from_currency_overflow() {
        assert_eq!(
            TickPrice::from_currency(i64::MAX),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_from_decimal_exact() {
        let px = TickPrice::from_decimal(Decimal::new(101050, 2)).unwrap(); // 1010.50
        assert_eq!(px.ticks(), 101_050);
    }

    #[test]
    fn test_from_decimal_sub_tick() {
        // 10.005 does not land on a 0.01 grid
        let result = TickPrice::from_decimal(Decimal::new(10005, 3));
        assert_eq!(result, Err(NumericError::PrecisionLoss));
    }

    #[test]
    fn test_parse() {
        let px: TickPrice = "520.10".parse().unwrap();
        assert_eq!(px.ticks(), 52_010);

        let whole: TickPrice = "42".parse().unwrap();
        assert_eq!(whole.ticks(), 4_200);

        let neg: TickPrice = "-0.25".parse().unwrap();
        assert_eq!(neg.ticks(), -25);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            "not_a_price".parse::<TickPrice>(),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(
            "10.005".parse::<TickPrice>(),
            Err(NumericError::PrecisionLoss)
        );
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = TickPrice::from_ticks(100);
        let b = TickPrice::from_ticks(30);
        assert_eq!(a.checked_add(b).unwrap().ticks(), 130);
        assert_eq!(a.checked_sub(b).unwrap().ticks(), 70);

        assert_eq!(
            TickPrice::MAX.checked_add(TickPrice::from_ticks(1)),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            TickPrice::MIN.checked_sub(TickPrice::from_ticks(1)),
            Err(NumericError::Underflow)
        );
    }

    #[test]
    fn test_ordering_is_tick_ordering() {
        let lo = TickPrice::from_ticks(100_000);
        let hi = TickPrice::from_ticks(101_000);
        assert!(lo < hi);
        assert_eq!(lo.max(hi), hi);
    }

    #[test]
    fn test_display() {
        assert_eq!(TickPrice::from_ticks(101_050).to_string(), "1010.50");
        assert_eq!(TickPrice::from_ticks(5).to_string(), "0.05");
        assert_eq!(TickPrice::from_ticks(-25).to_string(), "-0.25");
    }

    #[test]
    fn test_midpoint() {
        let bid = TickPrice::from_ticks(100_000);
        let ask = TickPrice::from_ticks(101_000);
        assert_eq!(bid.midpoint(ask).ticks(), 100_500);
    }
}
