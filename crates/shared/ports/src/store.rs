use async_trait::async_trait;
use chrono::{DateTime, Utc};
use plutus_core::{Agent, AgentId, PerformanceMetrics, TradeRecord};
use rust_decimal::Decimal;

use crate::error::StoreResult;

/// Port for the persistence collaborator
///
/// The store owns agent records and the append-only trade ledger. The engine
/// reads agents, updates their capital, appends trades, and upserts one
/// current performance record per agent; it never deletes anything.
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// All agents currently in active status
    async fn active_agents(&self) -> StoreResult<Vec<Agent>>;

    /// Point read of one agent
    async fn agent(&self, id: AgentId) -> StoreResult<Agent>;

    /// Set an agent's capital and last-trade timestamp
    ///
    /// `last_trade_at` is `None` only when the agent has no executed trades.
    async fn update_agent_capital(
        &self,
        id: AgentId,
        new_capital: Decimal,
        last_trade_at: Option<DateTime<Utc>>,
    ) -> StoreResult<()>;

    /// Append one executed trade to the ledger
    async fn insert_trade(&self, trade: TradeRecord) -> StoreResult<TradeRecord>;

    /// Full executed-trade history for an agent, ordered by execution time
    /// ascending
    async fn executed_trades(&self, agent_id: AgentId) -> StoreResult<Vec<TradeRecord>>;

    /// Replace the agent's current performance snapshot
    async fn upsert_performance(&self, metrics: PerformanceMetrics) -> StoreResult<()>;
}
