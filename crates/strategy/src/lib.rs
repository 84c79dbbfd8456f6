//! Plutus Strategy
//!
//! The signal generator: pure, deterministic rule sets keyed by
//! `StrategyKind`, plus position sizing and the recommended-ticker tables.
//! No I/O lives here; everything is unit testable with plain inputs.

mod rules;
mod sizing;
mod tickers;

pub use rules::generate;
pub use sizing::position_size;
pub use tickers::{DEFAULT_BASKET, recommended_tickers};
