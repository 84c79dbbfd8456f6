//! Paper-order execution
//!
//! Two store writes per trade, deliberately not atomic across them:
//! 1. append the trade record to the ledger
//! 2. apply the signed cash flow to the agent's capital
//!
//! A failure on step 1 aborts with no capital mutation. A failure on step 2
//! is surfaced as `CapitalUpdateFailed` - the ledger is authoritative and
//! `reconcile_capital` rebuilds capital from it.

use plutus_core::{AgentId, TradeRecord, TradeSide};
use plutus_ports::{Clock, PersistenceStore, StoreError};
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::error::{ExecutorError, Result};

/// A proposed paper trade, validated and persisted by the executor
#[derive(Debug, Clone)]
pub struct TradeRequest {
    pub agent_id: AgentId,
    pub ticker: String,
    pub side: TradeSide,
    pub quantity: u64,
    pub price: Decimal,
    pub reasoning: Option<String>,
}

/// Result of a successful execution
#[derive(Debug, Clone)]
pub struct Execution {
    /// The persisted trade record
    pub trade: TradeRecord,
    /// The agent's capital after applying the trade's cash flow
    pub new_capital: Decimal,
}

/// Validates, persists, and settles paper trades
pub struct OrderExecutor {
    store: Arc<dyn PersistenceStore>,
    clock: Arc<dyn Clock>,
}

impl OrderExecutor {
    pub fn new(store: Arc<dyn PersistenceStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Execute a paper trade
    ///
    /// Preconditions: quantity > 0, price > 0, the agent exists. Buys and
    /// covers are rejected with `InsufficientCapital` when their value
    /// exceeds current capital; sells and shorts carry no capital check
    /// (short margin is not modeled).
    pub async fn execute(&self, request: TradeRequest) -> Result<Execution> {
        if request.quantity == 0 {
            return Err(ExecutorError::InvalidQuantity);
        }
        if request.price <= Decimal::ZERO {
            return Err(ExecutorError::InvalidPrice {
                price: request.price,
            });
        }

        let agent = self.store.agent(request.agent_id).await.map_err(|e| match e {
            StoreError::AgentNotFound(id) => ExecutorError::AgentNotFound(id),
            other => ExecutorError::Store(other),
        })?;

        let trade_value = Decimal::from(request.quantity) * request.price;
        if request.side.requires_capital() && trade_value > agent.current_capital {
            log::info!(
                "[{}] Declined {} {} x {} @ {}: insufficient capital ({} available)",
                agent.id,
                request.side,
                request.quantity,
                request.ticker,
                request.price,
                agent.current_capital
            );
            return Err(ExecutorError::InsufficientCapital {
                required: trade_value,
                available: agent.current_capital,
            });
        }

        // Step 1: append to the ledger. Abort on failure, capital untouched.
        let trade = TradeRecord::new(
            agent.id,
            request.ticker,
            request.side,
            request.quantity,
            request.price,
            self.clock.now(),
            request.reasoning,
        );
        let trade = self.store.insert_trade(trade).await?;

        // Step 2: settle capital. The trade already stands if this fails.
        let new_capital = agent.current_capital + trade.cash_flow();
        if let Err(source) = self
            .store
            .update_agent_capital(agent.id, new_capital, Some(trade.executed_at))
            .await
        {
            log::error!(
                "[{}] Trade {} recorded but capital update failed: {}",
                agent.id,
                trade.id,
                source
            );
            return Err(ExecutorError::CapitalUpdateFailed {
                trade_id: trade.id,
                source,
            });
        }

        log::info!(
            "[{}] Executed {} {} x {} @ {} (capital {} -> {})",
            agent.id,
            trade.side,
            trade.quantity,
            trade.ticker,
            trade.price,
            agent.current_capital,
            new_capital
        );

        Ok(Execution { trade, new_capital })
    }

    /// Rebuild an agent's capital from the ledger and write it back
    ///
    /// Recovery path for a `CapitalUpdateFailed` divergence:
    /// `initial_capital` plus the signed cash flow of every executed trade.
    pub async fn reconcile_capital(&self, agent_id: AgentId) -> Result<Decimal> {
        let agent = self.store.agent(agent_id).await.map_err(|e| match e {
            StoreError::AgentNotFound(id) => ExecutorError::AgentNotFound(id),
            other => ExecutorError::Store(other),
        })?;
        let trades = self.store.executed_trades(agent_id).await?;

        let capital = agent.initial_capital
            + trades
                .iter()
                .map(TradeRecord::cash_flow)
                .sum::<Decimal>();
        // An empty ledger rebuilds to initial capital and no trade timestamp
        let last_trade_at = trades.last().map(|t| t.executed_at);

        self.store
            .update_agent_capital(agent_id, capital, last_trade_at)
            .await?;

        if capital != agent.current_capital {
            log::warn!(
                "[{agent_id}] Reconciled capital from ledger: {} -> {capital}",
                agent.current_capital
            );
        }

        Ok(capital)
    }
}
