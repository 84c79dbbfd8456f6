//! Plutus Scheduler
//!
//! Drives one evaluation cycle over all active agents: pick a ticker, fetch
//! a quote, generate a signal, gate it on confidence, then execute or hold.
//! Each agent's pipeline is isolated - one agent's failure never aborts the
//! batch - and pipelines run concurrently up to a configured bound.

mod cycle;
mod report;

pub use cycle::{CycleConfig, CycleError, CycleScheduler};
pub use report::{AgentOutcome, BatchReport};
