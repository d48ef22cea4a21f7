//! Instruments Clock Infrastructure
//!
//! Time sources for order timestamping:
//!
//! ## Tick sources
//!
//! ```text
//! OrderTicker    real-time ticks (default 1 ms), waits for the next tick
//! SteppedTicker  deterministic step, 2*step, 3*step, ...
//! ClockTicker    offsets measured on any Clock (SystemClock, ManualClock)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use instruments_clock::{OrderTicker, load_default_config};
//! use std::sync::Arc;
//!
//! let config = load_default_config()?;
//! let ticker = Arc::new(OrderTicker::from_config(&config)?);
//! let order = quote.fill_order(price, volume, Side::Buy, Logic::Market, ticker);
//! ```

mod clock_ticker;
mod clocks;
pub mod config;
mod ticker;

pub use clock_ticker::ClockTicker;
pub use clocks::{ManualClock, SystemClock};
pub use config::{ConfigError, TickerConfig, load_config, load_config_from_str, load_default_config};
pub use ticker::{OrderTicker, SteppedTicker};

// Re-export the ports for convenience
pub use instruments_ports::{Clock, TickSource, Timestamp};
