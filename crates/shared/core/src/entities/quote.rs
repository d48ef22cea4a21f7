use std::sync::Arc;

use instruments_ports::TickSource;
use log::debug;
use serde::{Deserialize, Serialize};

use super::{Logic, Order, QuotedMetric, Side};
use crate::error::Result;
use crate::values::{Amount, Price, Symbol, Timestamp, Volume};

/// Bid/ask snapshot for a security, produced by the market data feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub name: Symbol,
    pub bid: QuotedMetric,
    pub ask: QuotedMetric,
    pub timestamp: Timestamp,
}

impl Quote {
    pub fn new(
        name: impl Into<Symbol>,
        bid: QuotedMetric,
        ask: QuotedMetric,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            name: name.into(),
            bid,
            ask,
            timestamp,
        }
    }

    pub fn total_bid(&self) -> Result<Amount> {
        self.bid.total()
    }

    pub fn total_ask(&self) -> Result<Amount> {
        self.ask.total()
    }

    /// The side an order of `side` executes against: buys lift the ask,
    /// sells hit the bid
    pub fn side(&self, side: Side) -> &QuotedMetric {
        match side {
            Side::Buy => &self.ask,
            Side::Sell => &self.bid,
        }
    }

    pub fn spread(&self) -> Price {
        self.ask.price - self.bid.price
    }

    /// Midpoint of bid and ask, truncated to the cent
    pub fn mid(&self) -> Price {
        self.bid.price.avg(1, self.ask.price)
    }

    /// Build an order executing against this quote.
    ///
    /// The quote is authoritative: the order takes the name, price and volume
    /// of the side being hit and the quote's timestamp. `price` and `volume`
    /// are caller hints and never override the quoted values.
    pub fn fill_order(
        &self,
        price: Price,
        volume: Volume,
        side: Side,
        logic: Logic,
        ticker: Arc<dyn TickSource>,
    ) -> Order {
        let quoted = *self.side(side);
        if quoted.price != price || quoted.volume != volume {
            debug!(
                "Fill hint {} @ {} for {} overridden by quote {} @ {}",
                volume, price, self.name, quoted.volume, quoted.price
            );
        }
        Order::new(
            self.name.clone(),
            side,
            logic,
            quoted.price,
            quoted.volume,
            self.timestamp,
            ticker,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::OrderStatus;
    use crate::error::Error;
    use crate::test_support::{StepTicker, epoch};

    fn mock_quote() -> Quote {
        Quote::new(
            "AAPL",
            QuotedMetric::new(Price::new(10.00), Volume::new(10.00)),
            QuotedMetric::new(Price::new(10.00), Volume::new(10.00)),
            epoch(),
        )
    }

    #[test]
    fn test_total_bid_and_ask() {
        let quote = mock_quote();
        assert_eq!(quote.total_bid(), Ok(Amount::from_cents(100 * 100)));
        assert_eq!(quote.total_ask(), Ok(Amount::from_cents(100 * 100)));
    }

    #[test]
    fn test_totals_propagate_invalid_metric() {
        let mut quote = mock_quote();
        quote.bid.price = Price::ZERO;
        assert_eq!(quote.total_bid(), Err(Error::InvalidMetric));
        assert!(quote.total_ask().is_ok());
    }

    #[test]
    fn test_fill_order() {
        let quote = mock_quote();
        let order = quote.fill_order(
            Price::new(10.00),
            Volume::new(10.00),
            Side::Buy,
            Logic::Market,
            Arc::new(StepTicker::default()),
        );

        assert_eq!(order.name, "AAPL");
        assert_eq!(order.side, Side::Buy);
        assert_eq!(order.logic, Logic::Market);
        assert_eq!(order.price, Price::new(10.00));
        assert_eq!(order.volume, Volume::new(10.00));
        assert_eq!(order.remaining(), Volume::new(10.00));
        assert_eq!(order.status(), OrderStatus::Open);
        assert_eq!(order.timestamp(), quote.timestamp);
    }

    #[test]
    fn test_fill_order_quote_is_authoritative() {
        let quote = Quote::new(
            "MSFT",
            QuotedMetric::new(Price::new(99.50), Volume::new(300.0)),
            QuotedMetric::new(Price::new(100.25), Volume::new(200.0)),
            epoch(),
        );
        let ticker: Arc<dyn TickSource> = Arc::new(StepTicker::default());

        let buy = quote.fill_order(
            Price::new(1.00),
            Volume::new(1.0),
            Side::Buy,
            Logic::Limit,
            ticker.clone(),
        );
        assert_eq!(buy.price, Price::new(100.25));
        assert_eq!(buy.volume, Volume::new(200.0));

        let sell = quote.fill_order(
            Price::new(1.00),
            Volume::new(1.0),
            Side::Sell,
            Logic::Market,
            ticker,
        );
        assert_eq!(sell.price, Price::new(99.50));
        assert_eq!(sell.volume, Volume::new(300.0));
    }

    #[test]
    fn test_spread_saturates_on_extreme_prices() {
        let quote = Quote::new(
            "AAPL",
            QuotedMetric::new(Price::new(-1.0), Volume::new(1.0)),
            QuotedMetric::new(Price::new(1e17), Volume::new(1.0)),
            epoch(),
        );
        assert_eq!(quote.spread(), Price::from_cents(i64::MAX));
    }

    #[test]
    fn test_spread_and_mid() {
        let quote = Quote::new(
            "MSFT",
            QuotedMetric::new(Price::new(99.50), Volume::new(300.0)),
            QuotedMetric::new(Price::new(100.25), Volume::new(200.0)),
            epoch(),
        );
        assert_eq!(quote.spread(), Price::new(0.75));
        // (9950 + 10025) / 2 = 9987.5 -> 9987
        assert_eq!(quote.mid(), Price::from_cents(9987));
    }
}
