use plutus_core::{Agent, AgentId, SignalAction, TradeSignal};
use plutus_executor::Execution;
use rust_decimal::Decimal;
use serde::Serialize;

/// Terminal state of one agent's pipeline within a cycle
///
/// Exactly one outcome is recorded per evaluated agent: an executed trade,
/// a hold, or a failure with the error text.
#[derive(Debug, Clone, Serialize)]
pub struct AgentOutcome {
    pub agent_id: AgentId,
    pub agent_name: String,
    pub ticker: String,
    pub action: SignalAction,
    pub quantity: Option<u64>,
    pub price: Option<Decimal>,
    pub confidence: Option<Decimal>,
    pub reasoning: Option<String>,
    pub success: bool,
    pub error: Option<String>,
}

impl AgentOutcome {
    /// A signal that passed the gate and executed
    pub fn executed(agent: &Agent, ticker: &str, signal: &TradeSignal, execution: &Execution) -> Self {
        Self {
            agent_id: agent.id,
            agent_name: agent.name.clone(),
            ticker: ticker.to_string(),
            action: signal.action,
            quantity: Some(execution.trade.quantity),
            price: Some(execution.trade.price),
            confidence: Some(signal.confidence),
            reasoning: Some(signal.reasoning.clone()),
            success: true,
            error: None,
        }
    }

    /// A hold signal, or an actionable signal the confidence gate declined
    pub fn held(agent: &Agent, ticker: &str, signal: &TradeSignal) -> Self {
        Self {
            agent_id: agent.id,
            agent_name: agent.name.clone(),
            ticker: ticker.to_string(),
            action: SignalAction::Hold,
            quantity: None,
            price: None,
            confidence: Some(signal.confidence),
            reasoning: Some(signal.reasoning.clone()),
            success: true,
            error: None,
        }
    }

    /// A pipeline failure (quote outage, timeout, store or executor error)
    pub fn failure(agent: &Agent, ticker: &str, error: impl Into<String>) -> Self {
        Self {
            agent_id: agent.id,
            agent_name: agent.name.clone(),
            ticker: ticker.to_string(),
            action: SignalAction::Hold,
            quantity: None,
            price: None,
            confidence: None,
            reasoning: None,
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Result of one full cycle over the active agents
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// Number of agents evaluated
    pub processed: usize,
    /// One entry per agent, in the order the store returned them
    pub results: Vec<AgentOutcome>,
}

impl BatchReport {
    /// Outcomes that executed a trade
    pub fn executed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.success && r.quantity.is_some())
            .count()
    }

    /// Outcomes that held
    pub fn held(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.success && r.quantity.is_none())
            .count()
    }

    /// Outcomes that failed
    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| !r.success).count()
    }
}
