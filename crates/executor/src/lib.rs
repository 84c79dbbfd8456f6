//! Plutus Executor
//!
//! The side-effecting half of the engine: capital-checked paper-order
//! execution against the persistence store, and full recomputation of
//! per-agent performance aggregates from the executed-trade ledger.

mod error;
mod execution;
mod performance;

pub use error::{ExecutorError, Result};
pub use execution::{Execution, OrderExecutor, TradeRequest};
pub use performance::PerformanceRecalculator;
