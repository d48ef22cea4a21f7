use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Duration, TimeZone, Utc};
use instruments_ports::TickSource;

use crate::values::Timestamp;

pub(crate) fn epoch() -> Timestamp {
    Utc.with_ymd_and_hms(2017, 1, 3, 9, 30, 0).unwrap()
}

/// Ticks 1 ms, 2 ms, 3 ms, ...
#[derive(Default)]
pub(crate) struct StepTicker {
    ticks: AtomicI64,
}

impl TickSource for StepTicker {
    fn next(&self) -> Duration {
        Duration::milliseconds(self.ticks.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn name(&self) -> &str {
        "StepTicker"
    }
}
