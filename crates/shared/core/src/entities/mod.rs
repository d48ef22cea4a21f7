mod holding;
mod logic;
mod order;
mod order_status;
mod quote;
mod quoted_metric;
mod side;
mod summary;
mod transaction;

pub use holding::{Holding, TxMetric};
pub use logic::Logic;
pub use order::{Order, OrderId};
pub use order_status::OrderStatus;
pub use quote::Quote;
pub use quoted_metric::QuotedMetric;
pub use side::Side;
pub use summary::{Summary, SummaryMetric};
pub use transaction::Transaction;
