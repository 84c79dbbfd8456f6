use chrono::Utc;
use plutus_core::Timestamp;
use plutus_ports::Clock;

/// Wall-clock time source for production wiring
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}
