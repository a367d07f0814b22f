//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    32.00 × 8% = 2.5600000000000001                                      │
//! │                                                                         │
//! │  Integer cents cannot hold 1.5 × $3.33 or 25/30 of a salary exactly.   │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal, rounded only at the edges               │
//! │    32.00 × 8 / 100 = 2.56 exactly                                       │
//! │    2400 × 25 / 30  = 2000 exactly                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use docforge_core::money::Money;
//! use rust_decimal_macros::dec;
//!
//! let price = Money::from_cents(1099); // 10.99
//! let line = price.multiply_quantity(dec!(2));
//! assert_eq!(line.to_string(), "21.98");
//!
//! // Display always rounds half away from zero to two places
//! assert_eq!(Money::from_decimal(dec!(0.125)).to_string(), "0.13");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};
use ts_rs::TS;

use crate::types::Rate;

/// Number of decimal places shown for every currency the engine supports.
pub const DISPLAY_DECIMALS: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in major currency units (rupees, dollars).
///
/// ## Design Decisions
/// - **Decimal (signed)**: negative values are legal; a fixed discount larger
///   than the subtotal produces a negative total and the engine reports it
/// - **Full precision**: values keep every digit the arithmetic produced;
///   [`Money::round_to_cents`] is applied by the display layer or by an
///   explicit rounding policy
/// - **Serialized as a string** so the browser never parses it as a float
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  LineItem.unit_rate ──► LineItem.amount() ──► aggregate() ──► subtotal  │
/// │                                                                         │
/// │  subtotal ──► discount ──► + shipping ──► taxable ──► tax ──► total     │
/// │                                                                         │
/// │  PayrollComponents ──► gross ──► × attendance ratio ──► net salary      │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(#[ts(type = "string")] Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use docforge_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -5.50, not -4.50
    pub fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money::from_cents(major * 100 - minor)
        } else {
            Money::from_cents(major * 100 + minor)
        }
    }

    /// Returns the exact decimal amount.
    #[inline]
    pub const fn decimal(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Returns the larger of this amount and zero.
    #[inline]
    pub fn clamp_at_zero(&self) -> Self {
        Money(self.0.max(Decimal::ZERO))
    }

    /// Rounds to two decimal places, half away from zero.
    ///
    /// This is the rounding every displayed figure goes through, and the one
    /// the per-step rounding policy applies inside the pricing pipeline.
    ///
    /// ## Example
    /// ```rust
    /// use docforge_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Money::from_decimal(dec!(2.345)).round_to_cents(), Money::from_cents(235));
    /// assert_eq!(Money::from_decimal(dec!(-2.345)).round_to_cents(), Money::from_cents(-235));
    /// ```
    pub fn round_to_cents(&self) -> Self {
        self.round_to(DISPLAY_DECIMALS)
    }

    /// Rounds to whole units, half away from zero.
    pub fn round_to_units(&self) -> Self {
        self.round_to(0)
    }

    fn round_to(&self, dp: u32) -> Self {
        let rounded = self
            .0
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        if rounded.is_zero() {
            // Keeps -0.001 from displaying as "-0.00"
            Money::zero()
        } else {
            Money(rounded)
        }
    }

    /// Calculates `rate` percent of this amount.
    ///
    /// ## Example
    /// ```rust
    /// use docforge_core::money::Money;
    /// use docforge_core::types::Rate;
    ///
    /// let taxable = Money::from_cents(3200); // 32.00
    /// let tax = taxable.percentage(Rate::from_bps(800)); // 8%
    /// assert_eq!(tax, Money::from_cents(256));
    /// ```
    pub fn percentage(&self, rate: Rate) -> Money {
        Money(self.0 * rate.percent() / Decimal::ONE_HUNDRED)
    }

    /// Multiplies money by a (possibly fractional) quantity.
    #[inline]
    pub fn multiply_quantity(&self, qty: Decimal) -> Self {
        Money(self.0 * qty)
    }

    /// Scales the amount by `part / whole`, multiplying before dividing.
    ///
    /// Multiplying first keeps round figures round: 2400 × 25 / 30 is exactly
    /// 2000, where 2400 × (25 / 30) would carry a repeating decimal.
    ///
    /// Returns `None` when `whole` is zero.
    pub fn scale(&self, part: u32, whole: u32) -> Option<Money> {
        if whole == 0 {
            return None;
        }
        Some(Money(self.0 * Decimal::from(part) / Decimal::from(whole)))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount rounded to two places without a currency symbol.
///
/// ## Note
/// Symbols and digit grouping belong to [`crate::currency`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rounded = self.round_to_cents().0;
        rounded.rescale(DISPLAY_DECIMALS);
        write!(f, "{}", rounded)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Multiplication by a decimal factor (quantities, ratios).
impl Mul<Decimal> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, factor: Decimal) -> Self {
        Money(self.0 * factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
