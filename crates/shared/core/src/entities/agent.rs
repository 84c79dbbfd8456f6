use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{RiskTolerance, StrategyKind};
use crate::values::Money;

/// Unique identifier for an agent
pub type AgentId = Uuid;

/// Agent lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    Active,
    Paused,
    Stopped,
}

impl AgentStatus {
    /// Only active agents are evaluated by the scheduler
    pub fn is_active(&self) -> bool {
        matches!(self, AgentStatus::Active)
    }
}

/// A configured, capital-bearing autonomous strategy executor
///
/// Agents are owned by the persistence store; the engine reads them and
/// updates capital through executed trades, but never creates or deletes
/// them. Aggregate counters (trade count, win rate, ...) are not kept here:
/// the executed-trade ledger is authoritative and `PerformanceMetrics` is
/// recomputed from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    /// `None` when the stored strategy type is unknown or unset;
    /// such agents always hold.
    pub strategy: Option<StrategyKind>,
    pub risk_tolerance: RiskTolerance,
    pub status: AgentStatus,
    /// Immutable after creation
    pub initial_capital: Money,
    /// Mutated only through executed trades
    pub current_capital: Money,
    pub last_trade_at: Option<DateTime<Utc>>,
}

impl Agent {
    /// Create a new agent with its full starting capital available
    pub fn new(
        name: impl Into<String>,
        strategy: Option<StrategyKind>,
        risk_tolerance: RiskTolerance,
        initial_capital: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            strategy,
            risk_tolerance,
            status: AgentStatus::Active,
            initial_capital,
            current_capital: initial_capital,
            last_trade_at: None,
        }
    }

    /// Total return since inception, as a fraction of initial capital
    ///
    /// Zero when initial capital is zero (nothing to measure against).
    pub fn total_return(&self) -> Decimal {
        if self.initial_capital.is_zero() {
            return Decimal::ZERO;
        }
        (self.current_capital - self.initial_capital) / self.initial_capital
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_agent_starts_active_with_full_capital() {
        let agent = Agent::new(
            "momo",
            Some(StrategyKind::Momentum),
            RiskTolerance::Medium,
            dec!(100000),
        );
        assert!(agent.status.is_active());
        assert_eq!(agent.current_capital, agent.initial_capital);
        assert_eq!(agent.total_return(), Decimal::ZERO);
        assert!(agent.last_trade_at.is_none());
    }

    #[test]
    fn test_total_return_handles_zero_initial_capital() {
        let mut agent = Agent::new("broke", None, RiskTolerance::Low, Decimal::ZERO);
        agent.current_capital = dec!(50);
        assert_eq!(agent.total_return(), Decimal::ZERO);
    }
}
