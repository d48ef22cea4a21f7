use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::{Amount, MINOR_UNITS, Volume, write_currency};

/// Fixed-point price in minor units (two decimal digits)
///
/// `Price::new(10.0)` is stored as `1000`. All arithmetic stays in integer
/// cents so totals never pick up floating-point error. Operators saturate at
/// the `i64` bounds; totals and division are checked.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Create a price from a major-unit float, rounding to the nearest cent.
    ///
    /// No validation is performed: negative input yields a negative price,
    /// NaN yields zero and out-of-range values saturate.
    pub fn new(major: f64) -> Self {
        Self((major * MINOR_UNITS as f64).round() as i64)
    }

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Convert a decimal major-unit value, rounding half away from zero to cents.
    /// Returns `None` if the value does not fit.
    pub fn from_decimal(value: Decimal) -> Option<Self> {
        value
            .checked_mul(Decimal::ONE_HUNDRED)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .map(Self)
    }

    /// Exact decimal major-unit value
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Monetary total of `volume` units at this price, `None` on overflow
    pub fn checked_mul_volume(self, volume: Volume) -> Option<Amount> {
        self.0.checked_mul(volume.units()).map(Amount::from_cents)
    }

    /// Divide by an integer scalar, truncating toward zero.
    /// `None` for a zero divisor or on overflow.
    pub fn checked_div(self, rhs: i64) -> Option<Price> {
        self.0.checked_div(rhs).map(Price)
    }

    /// Running average after folding `value` into an average over `n` observations:
    /// `(self * n + value) / (n + 1)`.
    ///
    /// Integer division truncates toward zero, so repeated updates drift by up
    /// to one cent per step. The new average is returned; the receiver is
    /// left untouched.
    pub fn avg(self, n: u64, value: Price) -> Price {
        let n = i128::from(n);
        let total = i128::from(self.0) * n + i128::from(value.0);
        // a weighted mean of i64 values always fits back into i64
        Price((total / (n + 1)) as i64)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_currency(f, self.0)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Price {
    type Output = Price;

    fn sub(self, rhs: Price) -> Price {
        Price(self.0.saturating_sub(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl SubAssign for Price {
    fn sub_assign(&mut self, rhs: Price) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl Neg for Price {
    type Output = Price;

    fn neg(self) -> Price {
        Price(self.0.saturating_neg())
    }
}

impl Mul<i64> for Price {
    type Output = Price;

    fn mul(self, rhs: i64) -> Price {
        Price(self.0.saturating_mul(rhs))
    }
}
