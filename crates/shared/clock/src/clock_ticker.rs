use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Duration;
use instruments_ports::{Clock, TickSource, Timestamp};

use crate::SystemClock;

/// Minimum spacing between offsets when the clock has not moved
const MIN_STEP_NANOS: i64 = 1_000;

/// Tick source measuring offsets on a [`Clock`]
///
/// The offset is `clock.now() - start`. When the clock stands still (or
/// moves backwards) the previous offset is bumped by one microsecond so
/// offsets keep strictly increasing.
pub struct ClockTicker {
    clock: Arc<dyn Clock>,
    start: Timestamp,
    last_nanos: AtomicI64,
}

impl ClockTicker {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let start = clock.now();
        Self {
            clock,
            start,
            last_nanos: AtomicI64::new(0),
        }
    }

    /// Ticker on wall-clock time
    pub fn system() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl TickSource for ClockTicker {
    fn next(&self) -> Duration {
        let elapsed = (self.clock.now() - self.start)
            .num_nanoseconds()
            .unwrap_or(i64::MAX);
        let bump = |last: i64| last.saturating_add(MIN_STEP_NANOS).max(elapsed);

        let previous = self
            .last_nanos
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(bump(last)))
            .unwrap_or_else(|last| last);
        Duration::nanoseconds(bump(previous))
    }

    fn name(&self) -> &str {
        self.clock.name()
    }
}
