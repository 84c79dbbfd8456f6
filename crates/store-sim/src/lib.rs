//! Store Simulation
//!
//! In-process stand-ins for the engine's two collaborators, used by
//! integration tests and local runs:
//! - `MemoryStore`: dashmap-backed persistence store with failure injection
//! - `ScriptedMarketData`: fixed quotes per ticker, with per-ticker outages

mod market;
mod store;

pub use market::ScriptedMarketData;
pub use store::MemoryStore;
