use serde::{Deserialize, Serialize};

use super::{OrderId, QuotedMetric, Side};
use crate::error::Result;
use crate::values::{Amount, Price, Symbol, Timestamp, Volume};

/// Immutable record of an executed fill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Order this transaction was produced from
    pub order_id: OrderId,
    pub name: Symbol,
    pub side: Side,
    pub price: Price,
    pub volume: Volume,
    pub timestamp: Timestamp,
}

impl Transaction {
    pub fn new(
        order_id: OrderId,
        name: impl Into<Symbol>,
        side: Side,
        price: Price,
        volume: Volume,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            order_id,
            name: name.into(),
            side,
            price,
            volume,
            timestamp,
        }
    }

    pub fn is_buy(&self) -> bool {
        self.side.is_buy()
    }

    /// Value of the transaction (price * volume)
    pub fn total(&self) -> Result<Amount> {
        QuotedMetric::new(self.price, self.volume).total()
    }
}
