use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::Transaction;
use crate::error::{Error, Result};
use crate::values::{Amount, Price, Symbol, Timestamp, Volume};

/// Price and date of a transaction that touched a holding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxMetric {
    pub price: Price,
    pub date: Timestamp,
}

/// Position accumulated from a buy transaction and reduced by sells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    pub name: Symbol,
    pub volume: Volume,
    /// Entry price and date
    pub buy: TxMetric,
    /// Latest exit price and date, if any volume was sold
    pub sell: Option<TxMetric>,
}

impl Holding {
    /// Open a holding from a buy transaction
    pub fn buy(tx: &Transaction) -> Result<Holding> {
        if !tx.is_buy() {
            warn!("Cannot open holding in {} from a sell transaction", tx.name);
            return Err(Error::invalid_tx("wanted buy, got sell"));
        }
        debug!("Holding opened: {} {} @ {}", tx.volume, tx.name, tx.price);
        Ok(Holding {
            name: tx.name.clone(),
            volume: tx.volume,
            buy: TxMetric {
                price: tx.price,
                date: tx.timestamp,
            },
            sell: None,
        })
    }

    /// Sell off part of the holding, returning the same (reduced) holding
    pub fn sell_off(&mut self, tx: &Transaction) -> Result<&mut Holding> {
        if tx.name != self.name {
            warn!("Cannot sell off {} with a {} transaction", self.name, tx.name);
            return Err(Error::invalid_tx(format!(
                "wanted {}, got {}",
                self.name, tx.name
            )));
        }
        if tx.is_buy() {
            warn!("Cannot sell off {} with a buy transaction", self.name);
            return Err(Error::invalid_tx("wanted sell, got buy"));
        }
        if tx.volume > self.volume {
            warn!(
                "Cannot sell {} of {}: only {} held",
                tx.volume, self.name, self.volume
            );
            return Err(Error::invalid_tx(format!(
                "sell of {} exceeds held volume {}",
                tx.volume, self.volume
            )));
        }

        self.volume -= tx.volume;
        self.sell = Some(TxMetric {
            price: tx.price,
            date: tx.timestamp,
        });
        debug!(
            "Holding reduced: sold {} {} @ {}, {} left",
            tx.volume, self.name, tx.price, self.volume
        );
        Ok(self)
    }

    /// True once everything has been sold off
    pub fn is_closed(&self) -> bool {
        self.volume.is_zero()
    }

    /// Entry value of what is still held
    pub fn cost_basis(&self) -> Result<Amount> {
        self.buy
            .price
            .checked_mul_volume(self.volume)
            .ok_or(Error::AmountOverflow)
    }
}
