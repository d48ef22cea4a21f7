use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{MINOR_UNITS, Price, write_currency};
use crate::error::{Error, Result};

/// Signed monetary amount in minor units (cents)
///
/// A total of `$10.00 x 10` is `Amount::from_cents(10_000)`, i.e. `$100.00`.
/// Operators saturate at the `i64` bounds.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Exact decimal major-unit value
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

/// Ratio of two prices scaled by 100: `divide($20.00, $10.00) == Amount(200)`.
///
/// Computed as `(top * 100) / bottom` so the two decimal digits of the ratio
/// survive: `divide($10.00, $3.00) == Amount(333)`. Integer division
/// truncates toward zero.
pub fn divide(top: Price, bottom: Price) -> Result<Amount> {
    if bottom.is_zero() {
        return Err(Error::DivideByZero);
    }
    top.cents()
        .checked_mul(MINOR_UNITS)
        .and_then(|scaled| scaled.checked_div(bottom.cents()))
        .map(Amount)
        .ok_or(Error::AmountOverflow)
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_currency(f, self.0)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount(self.0.saturating_sub(rhs.0))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Amount) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl Neg for Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        Amount(self.0.saturating_neg())
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}
