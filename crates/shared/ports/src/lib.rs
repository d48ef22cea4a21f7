//! Instruments Ports
//!
//! Port definitions (traits) for the instruments crates.
//! These define the boundaries between the trading primitives and the
//! time sources they depend on.

mod clock;
mod tick;

pub use clock::{Clock, Timestamp};
pub use tick::TickSource;
