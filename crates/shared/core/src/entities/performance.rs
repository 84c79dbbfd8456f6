use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AgentId;

/// Aggregate performance snapshot for one agent
///
/// Fully recomputed from the executed-trade ledger on every run of the
/// recalculator, never updated incrementally. One logical current record per
/// agent (upsert semantics in the store).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub agent_id: AgentId,
    pub total_trades: u64,
    pub winning_trades: u64,
    pub total_pnl: Decimal,
    /// Winning trades as a percentage of total trades
    pub win_rate: Decimal,
    /// Sum of traded notional value
    pub total_volume: Decimal,
    pub calculated_at: DateTime<Utc>,
}

impl PerformanceMetrics {
    /// Zeroed metrics for an agent with no executed trades
    pub fn empty(agent_id: AgentId, calculated_at: DateTime<Utc>) -> Self {
        Self {
            agent_id,
            total_trades: 0,
            winning_trades: 0,
            total_pnl: Decimal::ZERO,
            win_rate: Decimal::ZERO,
            total_volume: Decimal::ZERO,
            calculated_at,
        }
    }
}
