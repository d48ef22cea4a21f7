//! Instruments Core Domain
//!
//! Fixed-point trading primitives: prices, volumes and amounts, quotes,
//! orders and their transactions, holdings and running summaries.
//! This crate contains no async and no I/O; time enters only through the
//! injected [`TickSource`](instruments_ports::TickSource).
//!
//! ```text
//! Quote ──fill_order──► Order ──transact──► Transaction ──► Holding
//!   │                                           │
//!   └──────────── observe ──► Summary ◄── record┘
//! ```

pub mod entities;
pub mod error;
pub mod values;

#[cfg(test)]
mod test_support;

// Re-export commonly used types at crate root
pub use entities::{
    Holding, Logic, Order, OrderId, OrderStatus, Quote, QuotedMetric, Side, Summary,
    SummaryMetric, Transaction, TxMetric,
};
pub use error::{Error, Result};
pub use values::{Amount, Price, Symbol, Timestamp, Volume, divide};
