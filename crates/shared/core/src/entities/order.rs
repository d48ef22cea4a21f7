use std::fmt;
use std::sync::Arc;

use instruments_ports::TickSource;
use log::{debug, warn};
use uuid::Uuid;

use super::{Logic, OrderStatus, QuotedMetric, Side, Transaction};
use crate::error::{Error, Result};
use crate::values::{Amount, Price, Symbol, Timestamp, Volume};

/// Unique identifier for an order
pub type OrderId = Uuid;

/// Intent to trade a security, transacted into [`Transaction`]s
///
/// Transaction timestamps are `timestamp + ticker.next()`, so repeated
/// fills of the same order are strictly ordered in time.
#[derive(Clone)]
pub struct Order {
    pub id: OrderId,
    pub name: Symbol,
    pub side: Side,
    pub price: Price,
    pub volume: Volume,
    pub logic: Logic,
    remaining: Volume,
    status: OrderStatus,
    timestamp: Timestamp,
    ticker: Arc<dyn TickSource>,
}

impl Order {
    pub fn new(
        name: impl Into<Symbol>,
        side: Side,
        logic: Logic,
        price: Price,
        volume: Volume,
        timestamp: Timestamp,
        ticker: Arc<dyn TickSource>,
    ) -> Self {
        let order = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            side,
            price,
            volume,
            logic,
            remaining: volume,
            status: OrderStatus::Open,
            timestamp,
            ticker,
        };
        debug!(
            "Order created: {} {} {} {} @ {} ({:?})",
            order.id, order.side, order.volume, order.name, order.price, order.logic
        );
        order
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Volume still open for transacting
    pub fn remaining(&self) -> Volume {
        self.remaining
    }

    pub fn is_filled(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Base timestamp that transaction offsets are applied to
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Value of the order (price * volume)
    pub fn total(&self) -> Result<Amount> {
        QuotedMetric::new(self.price, self.volume).total()
    }

    /// Transact `volume` of the order.
    ///
    /// The returned transaction records the order's own price and volume;
    /// `price` is the caller's execution hint and only shows up in the logs.
    /// The order closes once nothing remains open.
    pub fn transact(&mut self, price: Price, volume: Volume) -> Result<Transaction> {
        if self.status != OrderStatus::Open {
            warn!("Order {} rejected fill: status {:?}", self.id, self.status);
            return Err(Error::OrderNotOpen(self.status));
        }
        if volume <= Volume::ZERO {
            return Err(Error::InvalidVolume(volume));
        }
        if volume > self.remaining {
            warn!(
                "Order {} rejected fill: requested {} with {} remaining",
                self.id, volume, self.remaining
            );
            return Err(Error::Overfill {
                requested: volume,
                remaining: self.remaining,
            });
        }

        let timestamp = self.timestamp_tx()?;
        self.remaining -= volume;
        if self.remaining.is_zero() {
            self.status = OrderStatus::Closed;
        }

        if price != self.price {
            debug!(
                "Order {} filled at order price {} (hint {})",
                self.id, self.price, price
            );
        }
        debug!(
            "Order {} transacted {} at {}, remaining {}",
            self.id, volume, timestamp, self.remaining
        );

        Ok(Transaction::new(
            self.id,
            self.name.clone(),
            self.side,
            self.price,
            self.volume,
            timestamp,
        ))
    }

    /// Withdraw the order without further execution
    pub fn cancel(&mut self) -> Result<()> {
        if self.status != OrderStatus::Open {
            warn!("Order {} cannot be cancelled: status {:?}", self.id, self.status);
            return Err(Error::OrderNotOpen(self.status));
        }
        self.status = OrderStatus::Cancelled;
        debug!("Order {} cancelled, {} unfilled", self.id, self.remaining);
        Ok(())
    }

    fn timestamp_tx(&self) -> Result<Timestamp> {
        self.timestamp
            .checked_add_signed(self.ticker.next())
            .ok_or(Error::TimestampOverflow)
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("side", &self.side)
            .field("price", &self.price)
            .field("volume", &self.volume)
            .field("logic", &self.logic)
            .field("remaining", &self.remaining)
            .field("status", &self.status)
            .field("timestamp", &self.timestamp)
            .field("ticker", &self.ticker.name())
            .finish()
    }
}
