//! Plutus Clock Infrastructure
//!
//! Time sources behind the `Clock` port:
//! - `SystemClock`: wall-clock time for production
//! - `FixedClock`: pinned time for deterministic tests

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;
