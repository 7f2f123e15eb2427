use std::sync::LazyLock;
use std::time::{Duration, Instant};

/// Monotonic point in time used to measure solver calls
#[derive(Debug, Clone, Copy)]
pub struct TimeStamp(Instant);

impl TimeStamp {
    /// Get a new timestamp for "now"
    pub fn now() -> Self {
        TimeStamp(Instant::now())
    }

    /// Returns the elapsed [`Duration`] since the timestamp.
    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }

    /// Compute milliseconds elapsed between two timestamps
    pub fn since_ms(start: &Self, end: &Self) -> f64 {
        end.0.saturating_duration_since(start.0).as_secs_f64() * 1000.0
    }
}

/// Start of the process, used as reference for the log timestamps
pub static EPOCH: LazyLock<TimeStamp> = LazyLock::new(TimeStamp::now);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn since_is_never_negative() {
        let a = TimeStamp::now();
        let b = TimeStamp::now();
        assert!(TimeStamp::since_ms(&a, &b) >= 0.0);
        assert_eq!(TimeStamp::since_ms(&b, &a), 0.0);
    }
}
