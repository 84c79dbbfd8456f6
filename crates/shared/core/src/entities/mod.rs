mod agent;
mod performance;
mod quote;
mod risk;
mod signal;
mod strategy;
mod trade;

pub use agent::{Agent, AgentId, AgentStatus};
pub use performance::PerformanceMetrics;
pub use quote::Quote;
pub use risk::RiskTolerance;
pub use signal::{SignalAction, TradeSignal};
pub use strategy::StrategyKind;
pub use trade::{TradeId, TradeRecord, TradeSide, TradeStatus};
