use chrono::Duration;

/// Port for order-processing latency
///
/// Orders stamp their transactions with `order timestamp + next()`, which
/// simulates the discrete latency of processing a fill without relying on
/// wall-clock resolution.
///
/// Contract:
/// - every call returns an offset strictly greater than all offsets
///   previously returned by the same source
/// - a call never blocks for longer than roughly one tick
pub trait TickSource: Send + Sync {
    /// Next elapsed-tick offset
    fn next(&self) -> Duration;

    /// Get the tick source's name/identifier for debugging
    fn name(&self) -> &str {
        "TickSource"
    }
}
