//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A 5% GST on ₹745.50 summed over a day of orders drifts the same way.  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Minor Units (paise)                             │
//! │    ₹745.50 = 74550 paise, totals are exact integer sums                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are always held in the base currency (INR). Conversion into the
//! display currency happens at the edge, see [`crate::currency`].
//!
//! ## Usage
//! ```rust
//! use cafe_core::money::Money;
//!
//! let price = Money::from_minor(12000); // ₹120.00
//! let line = price * 2u32;              // ₹240.00
//! assert_eq!(line.minor(), 24000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest unit of the base currency (paise).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and discounts
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as the raw integer**: the persisted snapshot stores paise
///
/// ## Where Money is Used
/// ```text
/// MenuItem.price ──► OrderItem.price (frozen) ──► line total
///                                                   │
/// Order.subtotal ──► tax at settings rate ──► Order.total ──► Analytics
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (paise).
    ///
    /// ```rust
    /// use cafe_core::money::Money;
    ///
    /// let price = Money::from_minor(74550); // ₹745.50
    /// assert_eq!(price.minor(), 74550);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -5.50.
    ///
    /// ```rust
    /// use cafe_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(745, 50).minor(), 74550);
    /// assert_eq!(Money::from_major_minor(-5, 50).minor(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Creates Money from a fractional major amount, rounding to the nearest
    /// minor unit.
    ///
    /// Only used where a float is unavoidable: the output of a currency
    /// conversion through the settings-held exchange rates. Non-finite input
    /// degrades to zero.
    pub fn from_major_f64(major: f64) -> Self {
        if !major.is_finite() {
            return Money::zero();
        }
        Money((major * 100.0).round() as i64)
    }

    /// Returns the value in minor units (paise).
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (rupees) portion, truncated toward zero.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value as a fractional major amount (for conversion and
    /// display only).
    #[inline]
    pub fn to_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Calculates tax, rounding half away from zero to the nearest paisa.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    ///
    /// ```rust
    /// use cafe_core::money::Money;
    /// use cafe_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_minor(71000);   // ₹710.00
    /// let gst = TaxRate::from_bps(500);          // 5%
    /// assert_eq!(subtotal.calculate_tax(gst).minor(), 3550); // ₹35.50
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax = div_round_half_up(self.0 as i128 * rate.bps() as i128, 10_000);
        Money::from_minor(tax as i64)
    }

    /// Multiplies money by a quantity.
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Divides the amount evenly over `count` parts, rounding half up.
    ///
    /// Returns zero when `count` is zero, so averages over an empty set
    /// degrade gracefully.
    ///
    /// ```rust
    /// use cafe_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(1000).average_over(3).minor(), 333);
    /// assert_eq!(Money::from_minor(1000).average_over(0).minor(), 0);
    /// ```
    pub fn average_over(&self, count: usize) -> Money {
        if count == 0 {
            return Money::zero();
        }
        Money(div_round_half_up(self.0 as i128, count as i128) as i64)
    }

    /// Returns this amount as a whole-number percentage of `total`,
    /// rounded half up. Zero when `total` is not positive.
    ///
    /// ```rust
    /// use cafe_core::money::Money;
    ///
    /// let part = Money::from_minor(1);
    /// let total = Money::from_minor(8);
    /// assert_eq!(part.percentage_of(total), 13); // 12.5% → 13
    /// ```
    pub fn percentage_of(&self, total: Money) -> u32 {
        if total.0 <= 0 || self.0 <= 0 {
            return 0;
        }
        div_round_half_up(self.0 as i128 * 100, total.0 as i128) as u32
    }
}

/// Integer division rounding half away from zero. `d` must be positive.
fn div_round_half_up(n: i128, d: i128) -> i128 {
    if n >= 0 {
        (2 * n + d) / (2 * d)
    } else {
        -((-2 * n + d) / (2 * d))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal rendering without a currency symbol.
///
/// Symbols depend on the cafe's display currency; use
/// [`crate::currency::format_price`] for anything user-facing.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by an order quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
