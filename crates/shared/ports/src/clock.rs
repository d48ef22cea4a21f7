use chrono::{DateTime, Utc};

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Source of the current time, wall-clock or simulated
///
/// Order timestamps never read a clock directly. A clock is measured by a
/// [`TickSource`](crate::TickSource) adapter, which turns the time elapsed
/// since its creation into transaction offsets, so a frozen or manually
/// advanced clock gives reproducible transaction times.
pub trait Clock: Send + Sync {
    /// Current time on this clock
    fn now(&self) -> Timestamp;

    /// Clock name, reported by tick sources built on it
    fn name(&self) -> &str {
        "Clock"
    }
}
