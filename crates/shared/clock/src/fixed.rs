use chrono::{DateTime, TimeZone, Utc};
use plutus_core::Timestamp;
use plutus_ports::Clock;
use std::sync::Mutex;

/// Clock pinned to an explicit time, advanced manually
///
/// Use in tests where trade and metrics timestamps must be reproducible.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// A fixed clock at an arbitrary but stable instant
    pub fn default_epoch() -> Self {
        Self::new(Utc.with_ymd_and_hms(2024, 1, 2, 14, 30, 0).unwrap())
    }

    /// Advance the clock by a duration
    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_fixed_clock_is_stable_until_advanced() {
        let clock = FixedClock::default_epoch();
        let t1 = clock.now();
        let t2 = clock.now();
        assert_eq!(t1, t2);

        clock.advance(Duration::seconds(30));
        assert_eq!(clock.now() - t1, Duration::seconds(30));
    }
}
