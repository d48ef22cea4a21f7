use serde::{Deserialize, Serialize};

/// Order lifecycle status
///
/// `Open -> Closed` once fully transacted, `Open -> Cancelled` when withdrawn.
/// Both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order has not been fully transacted
    Open,
    /// Order has been transacted
    Closed,
    /// Order was closed without being transacted
    Cancelled,
}

impl OrderStatus {
    /// Returns true if the order is in a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Closed | OrderStatus::Cancelled)
    }
}
