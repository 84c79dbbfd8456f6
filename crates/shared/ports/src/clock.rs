use plutus_core::Timestamp;

/// Time source behind trade and metrics timestamps
///
/// Injected wherever the engine stamps a write, so tests can pin time:
/// - wall-clock time in production
/// - a fixed, manually advanced instant in tests
pub trait Clock: Send + Sync {
    /// Current time according to this clock
    fn now(&self) -> Timestamp;
}
