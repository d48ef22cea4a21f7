use serde::{Deserialize, Serialize};

use super::{Quote, Transaction};
use crate::values::{Price, Symbol, Timestamp, Volume};

/// An extreme price and when it was observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetric {
    pub price: Price,
    pub date: Timestamp,
}

impl SummaryMetric {
    pub fn new(price: Price, date: Timestamp) -> Self {
        Self { price, date }
    }

    /// Keep the larger price; ties go to the newer observation
    pub fn max(&mut self, price: Price, date: Timestamp) {
        if price >= self.price {
            self.price = price;
            self.date = date;
        }
    }

    /// Keep the smaller price; ties go to the newer observation
    pub fn min(&mut self, price: Price, date: Timestamp) {
        if price <= self.price {
            self.price = price;
            self.date = date;
        }
    }
}

/// Running bid/ask statistics for a security
///
/// Averages are recomputed on every update as
/// `(avg * n + value) / (n + 1)` in integer cents. Each step truncates
/// toward zero, so over many updates the averages can drift below the exact
/// mean by up to one cent per update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub name: Symbol,
    /// Number of bid/ask observations folded into the averages
    pub count: u64,
    /// Volume transacted
    pub volume: Volume,
    pub avg_bid: Price,
    pub avg_ask: Price,
    pub max_bid: SummaryMetric,
    pub max_ask: SummaryMetric,
    pub min_bid: SummaryMetric,
    pub min_ask: SummaryMetric,
}

impl Summary {
    /// Seed a summary with an initial bid/ask; the seed is not counted
    pub fn new(name: impl Into<Symbol>, bid: Price, ask: Price, date: Timestamp) -> Self {
        Self {
            name: name.into(),
            count: 0,
            volume: Volume::ZERO,
            avg_bid: bid,
            avg_ask: ask,
            max_bid: SummaryMetric::new(bid, date),
            max_ask: SummaryMetric::new(ask, date),
            min_bid: SummaryMetric::new(bid, date),
            min_ask: SummaryMetric::new(ask, date),
        }
    }

    pub fn from_quote(quote: &Quote) -> Self {
        Self::new(
            quote.name.clone(),
            quote.bid.price,
            quote.ask.price,
            quote.timestamp,
        )
    }

    /// Fold a bid/ask observation into the averages and extremes
    pub fn update_metrics(&mut self, bid: Price, ask: Price, date: Timestamp) {
        self.avg_bid = self.avg_bid.avg(self.count, bid);
        self.avg_ask = self.avg_ask.avg(self.count, ask);
        self.count += 1;

        self.max_bid.max(bid, date);
        self.max_ask.max(ask, date);
        self.min_bid.min(bid, date);
        self.min_ask.min(ask, date);
    }

    pub fn observe(&mut self, quote: &Quote) {
        self.update_metrics(quote.bid.price, quote.ask.price, quote.timestamp);
    }

    /// Add a transaction's volume to the traded total
    pub fn record(&mut self, tx: &Transaction) {
        self.volume += tx.volume;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{QuotedMetric, Side};
    use crate::test_support::epoch;
    use chrono::Duration;
    use uuid::Uuid;

    fn mock_summary() -> Summary {
        Summary::new("AAPL", Price::new(10.00), Price::new(10.00), epoch())
    }

    #[test]
    fn test_update_metrics_same_price() {
        let mut summary = mock_summary();
        summary.update_metrics(Price::new(10.00), Price::new(10.00), epoch());

        assert_eq!(summary.count, 1);
        assert_eq!(summary.avg_bid, Price::new(10.00));
        assert_eq!(summary.avg_ask, Price::new(10.00));
    }

    #[test]
    fn test_update_metrics_new_min() {
        let mut summary = mock_summary();
        let later = epoch() + Duration::seconds(1);
        summary.update_metrics(Price::ZERO, Price::new(10.00), later);

        assert_eq!(summary.min_bid, SummaryMetric::new(Price::ZERO, later));
        assert_eq!(summary.max_ask.price, Price::new(10.00));
        assert_eq!(summary.max_bid.price, Price::new(10.00));
        // first counted observation replaces the seed
        assert_eq!(summary.avg_bid, Price::ZERO);
    }

    #[test]
    fn test_running_average() {
        let mut summary = mock_summary();
        for (bid, ask) in [(10.0, 11.0), (20.0, 13.0), (30.0, 15.0)] {
            summary.update_metrics(Price::new(bid), Price::new(ask), epoch());
        }
        assert_eq!(summary.count, 3);
        assert_eq!(summary.avg_bid, Price::new(20.00));
        assert_eq!(summary.avg_ask, Price::new(13.00));
        assert_eq!(summary.max_bid.price, Price::new(30.00));
        assert_eq!(summary.min_ask.price, Price::new(10.00));
    }

    #[test]
    fn test_running_average_truncation_drift() {
        let mut summary = Summary::new("AAPL", Price::ZERO, Price::ZERO, epoch());
        // exact means: 0.01, 0.015, 0.0133.. ; truncated: 0.01, 0.01, 0.01
        for cents in [1, 2, 1] {
            let p = Price::from_cents(cents);
            summary.update_metrics(p, p, epoch());
        }
        assert_eq!(summary.avg_bid, Price::from_cents(1));
    }

    #[test]
    fn test_ties_favor_newest_observation() {
        let mut metric = SummaryMetric::new(Price::new(10.00), epoch());
        let later = epoch() + Duration::seconds(5);

        metric.max(Price::new(10.00), later);
        assert_eq!(metric.date, later);

        let latest = later + Duration::seconds(5);
        metric.min(Price::new(10.00), latest);
        assert_eq!(metric.date, latest);

        metric.max(Price::new(9.99), epoch());
        assert_eq!(metric.date, latest);
        metric.min(Price::new(10.01), epoch());
        assert_eq!(metric.date, latest);
    }

    #[test]
    fn test_record_saturates_volume() {
        let mut summary = mock_summary();
        let tx = Transaction::new(
            Uuid::nil(),
            "AAPL",
            Side::Buy,
            Price::new(10.00),
            Volume::new(9e18),
            epoch(),
        );
        summary.record(&tx);
        summary.record(&tx);
        assert_eq!(summary.volume, Volume::from_units(i64::MAX));
    }

    #[test]
    fn test_observe_and_record() {
        let quote = Quote::new(
            "AAPL",
            QuotedMetric::new(Price::new(9.50), Volume::new(100.0)),
            QuotedMetric::new(Price::new(10.50), Volume::new(50.0)),
            epoch() + Duration::minutes(1),
        );
        let mut summary = Summary::from_quote(&quote);
        assert_eq!(summary.count, 0);

        summary.observe(&quote);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.max_ask, SummaryMetric::new(Price::new(10.50), quote.timestamp));

        let tx = Transaction::new(
            Uuid::nil(),
            "AAPL",
            Side::Buy,
            Price::new(10.50),
            Volume::new(25.0),
            quote.timestamp,
        );
        summary.record(&tx);
        summary.record(&tx);
        assert_eq!(summary.volume, Volume::new(50.0));
    }
}
