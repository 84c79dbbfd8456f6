use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use plutus_core::{Agent, AgentId, PerformanceMetrics, TradeRecord};
use plutus_ports::{PersistenceStore, StoreError, StoreResult};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicBool, Ordering};

/// Dashmap-backed persistence store
///
/// Trades are appended per agent in arrival order and returned sorted by
/// execution time, matching the store contract. One-shot failure switches
/// let tests exercise the executor's saga error paths.
pub struct MemoryStore {
    agents: DashMap<AgentId, Agent>,
    trades: DashMap<AgentId, Vec<TradeRecord>>,
    performance: DashMap<AgentId, PerformanceMetrics>,
    fail_next_insert: AtomicBool,
    fail_next_capital_update: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            agents: DashMap::new(),
            trades: DashMap::new(),
            performance: DashMap::new(),
            fail_next_insert: AtomicBool::new(false),
            fail_next_capital_update: AtomicBool::new(false),
        }
    }

    /// Seed an agent record
    pub fn insert_agent(&self, agent: Agent) {
        self.agents.insert(agent.id, agent);
    }

    /// Current performance snapshot, if one has been upserted
    pub fn performance(&self, agent_id: AgentId) -> Option<PerformanceMetrics> {
        self.performance.get(&agent_id).map(|m| m.clone())
    }

    /// Number of ledger entries for an agent
    pub fn trade_count(&self, agent_id: AgentId) -> usize {
        self.trades.get(&agent_id).map(|t| t.len()).unwrap_or(0)
    }

    /// Fail the next `insert_trade` call with a backend error
    pub fn fail_next_insert(&self) {
        self.fail_next_insert.store(true, Ordering::SeqCst);
    }

    /// Fail the next `update_agent_capital` call with a backend error
    pub fn fail_next_capital_update(&self) {
        self.fail_next_capital_update.store(true, Ordering::SeqCst);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersistenceStore for MemoryStore {
    async fn active_agents(&self) -> StoreResult<Vec<Agent>> {
        let mut agents: Vec<Agent> = self
            .agents
            .iter()
            .filter(|entry| entry.status.is_active())
            .map(|entry| entry.clone())
            .collect();
        // Stable ordering for reproducible batches
        agents.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(agents)
    }

    async fn agent(&self, id: AgentId) -> StoreResult<Agent> {
        self.agents
            .get(&id)
            .map(|a| a.clone())
            .ok_or(StoreError::AgentNotFound(id))
    }

    async fn update_agent_capital(
        &self,
        id: AgentId,
        new_capital: Decimal,
        last_trade_at: Option<DateTime<Utc>>,
    ) -> StoreResult<()> {
        if self.fail_next_capital_update.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Backend(
                "injected capital update failure".to_string(),
            ));
        }
        let mut agent = self
            .agents
            .get_mut(&id)
            .ok_or(StoreError::AgentNotFound(id))?;
        agent.current_capital = new_capital;
        agent.last_trade_at = last_trade_at;
        Ok(())
    }

    async fn insert_trade(&self, trade: TradeRecord) -> StoreResult<TradeRecord> {
        if self.fail_next_insert.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Backend("injected insert failure".to_string()));
        }
        self.trades
            .entry(trade.agent_id)
            .or_default()
            .push(trade.clone());
        Ok(trade)
    }

    async fn executed_trades(&self, agent_id: AgentId) -> StoreResult<Vec<TradeRecord>> {
        let mut trades = self
            .trades
            .get(&agent_id)
            .map(|t| t.clone())
            .unwrap_or_default();
        trades.sort_by_key(|t| t.executed_at);
        Ok(trades)
    }

    async fn upsert_performance(&self, metrics: PerformanceMetrics) -> StoreResult<()> {
        self.performance.insert(metrics.agent_id, metrics);
        Ok(())
    }
}
