//! Plutus Core Domain
//!
//! Pure domain types for the Plutus paper-trading engine.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    // Agent configuration
    Agent,
    AgentId,
    AgentStatus,
    // Performance aggregates
    PerformanceMetrics,
    // Market data
    Quote,
    RiskTolerance,
    // Signals
    SignalAction,
    StrategyKind,
    // Trade ledger
    TradeRecord,
    TradeSide,
    TradeSignal,
    TradeStatus,
    TradeId,
};
pub use values::{Money, Symbol, Timestamp};
