//! Errors for the trading primitives

use thiserror::Error;

use crate::entities::OrderStatus;
use crate::values::Volume;

/// Domain-level errors. A failed operation never leaves its receiver
/// partially modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A quoted side has no price, usually uninitialised market data
    #[error("Invalid metric: price is zero")]
    InvalidMetric,

    #[error("Invalid transaction kind: {0}")]
    InvalidTransactionKind(String),

    #[error("Overfill: requested={requested}, remaining={remaining}")]
    Overfill { requested: Volume, remaining: Volume },

    #[error("Invalid volume: {0}")]
    InvalidVolume(Volume),

    #[error("Order is not open: {0:?}")]
    OrderNotOpen(OrderStatus),

    #[error("Division by a zero price")]
    DivideByZero,

    #[error("Amount overflow")]
    AmountOverflow,

    #[error("Timestamp out of range")]
    TimestampOverflow,
}

impl Error {
    /// Constructor for [`Error::InvalidTransactionKind`]
    pub fn invalid_tx(reason: impl Into<String>) -> Self {
        Self::InvalidTransactionKind(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
