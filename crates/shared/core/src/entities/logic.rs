use serde::{Deserialize, Serialize};

/// When an order should be executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Logic {
    /// Execute at current market price
    Market,
    /// Execute at specified price or better
    Limit,
}
