use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::values::{Amount, Price, Volume};

/// A price paired with a volume, one side of a quote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotedMetric {
    pub price: Price,
    pub volume: Volume,
}

impl QuotedMetric {
    pub fn new(price: Price, volume: Volume) -> Self {
        Self { price, volume }
    }

    /// Monetary value of this side in cents (`price * volume`)
    ///
    /// A zero price means the side was never quoted and yields
    /// [`Error::InvalidMetric`].
    pub fn total(&self) -> Result<Amount> {
        if self.price.is_zero() {
            return Err(Error::InvalidMetric);
        }
        self.price
            .checked_mul_volume(self.volume)
            .ok_or(Error::AmountOverflow)
    }
}
