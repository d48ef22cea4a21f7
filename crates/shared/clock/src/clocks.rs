use std::sync::Arc;

use chrono::{Duration, Utc};
use instruments_ports::{Clock, Timestamp};
use parking_lot::RwLock;

/// Wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}

/// Clock frozen at a given time, moved only by `advance` and `set_time`
pub struct ManualClock {
    current: RwLock<Timestamp>,
}

impl ManualClock {
    pub fn new(initial: Timestamp) -> Arc<Self> {
        Arc::new(Self {
            current: RwLock::new(initial),
        })
    }

    pub fn advance(&self, duration: Duration) {
        *self.current.write() += duration;
    }

    /// Warning: moving backwards creates a time discontinuity
    pub fn set_time(&self, time: Timestamp) {
        *self.current.write() = time;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current.read()
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}
