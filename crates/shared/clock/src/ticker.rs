use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::thread;
use std::time::{Duration as StdDuration, Instant};

use chrono::Duration;
use instruments_ports::TickSource;
use log::debug;

use crate::config::{ConfigError, TickerConfig};

/// Real-time tick source
///
/// Each call waits for the next tick boundary after both the previous tick
/// and the current instant, then returns that boundary's offset from the
/// ticker's creation. The wait is at most one interval under single-caller
/// use.
pub struct OrderTicker {
    start: Instant,
    interval: StdDuration,
    last_tick: AtomicU64,
}

impl OrderTicker {
    /// Create a ticker; a zero interval is raised to one nanosecond
    pub fn new(interval: StdDuration) -> Self {
        Self {
            start: Instant::now(),
            interval: interval.max(StdDuration::from_nanos(1)),
            last_tick: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &TickerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!("OrderTicker configured with {}ms ticks", config.interval_ms);
        Ok(Self::new(config.interval()))
    }

    pub fn interval(&self) -> StdDuration {
        self.interval
    }
}

impl Default for OrderTicker {
    fn default() -> Self {
        Self::new(TickerConfig::default().interval())
    }
}

impl TickSource for OrderTicker {
    fn next(&self) -> Duration {
        let interval = self.interval.as_nanos();
        let elapsed = (self.start.elapsed().as_nanos() / interval) as u64;

        let previous = self
            .last_tick
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(last.max(elapsed) + 1)
            })
            .unwrap_or_else(|last| last);
        let tick = previous.max(elapsed) + 1;

        let due = interval * u128::from(tick);
        let now = self.start.elapsed().as_nanos();
        if due > now {
            thread::sleep(StdDuration::from_nanos((due - now) as u64));
        }

        Duration::nanoseconds(i64::try_from(due).unwrap_or(i64::MAX))
    }

    fn name(&self) -> &str {
        "OrderTicker"
    }
}

/// Deterministic tick source returning `step, 2 * step, 3 * step, ...`
pub struct SteppedTicker {
    step_nanos: i64,
    ticks: AtomicI64,
}

impl SteppedTicker {
    /// Create a stepped ticker; non-positive steps are raised to one nanosecond
    pub fn new(step: Duration) -> Self {
        let step_nanos = step.num_nanoseconds().unwrap_or(i64::MAX).max(1);
        Self {
            step_nanos,
            ticks: AtomicI64::new(0),
        }
    }

    /// Number of offsets handed out so far
    pub fn ticks(&self) -> i64 {
        self.ticks.load(Ordering::SeqCst)
    }
}

impl Default for SteppedTicker {
    fn default() -> Self {
        Self::new(Duration::milliseconds(1))
    }
}

impl TickSource for SteppedTicker {
    fn next(&self) -> Duration {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst) + 1;
        Duration::nanoseconds(self.step_nanos.saturating_mul(tick))
    }

    fn name(&self) -> &str {
        "SteppedTicker"
    }
}
