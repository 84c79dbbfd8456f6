//! One evaluation cycle over all active agents
//!
//! State machine per agent: pick ticker -> fetch quote -> generate signal ->
//! confidence gate -> execute or hold -> record outcome. Agents share no
//! mutable state within a cycle (each agent's capital is touched by exactly
//! one pipeline), so pipelines run concurrently up to `max_concurrency`.
//! Overlapping cycles require store-level serialization per agent and are
//! the caller's responsibility.

use plutus_core::Agent;
use plutus_executor::{OrderExecutor, PerformanceRecalculator, TradeRequest};
use plutus_ports::{Clock, MarketDataProvider, PersistenceStore, StoreError};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinSet;

use crate::report::{AgentOutcome, BatchReport};

#[derive(Error, Debug)]
pub enum CycleError {
    /// Failing to list the active agents is the only whole-batch error
    #[error("Failed to fetch active agents: {0}")]
    Store(#[from] StoreError),
}

/// Scheduler tuning
#[derive(Debug, Clone)]
pub struct CycleConfig {
    /// Upper bound on concurrently evaluated agents (respects collaborator
    /// rate limits)
    pub max_concurrency: usize,
    /// Per-agent deadline on the market-data fetch; a stuck call fails that
    /// agent, not the batch
    pub quote_timeout: Duration,
    /// Seed for the performance recalculator's margin sampler
    pub performance_seed: u64,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 4,
            quote_timeout: Duration::from_secs(5),
            performance_seed: 0,
        }
    }
}

/// Orchestrates evaluation cycles
///
/// Both collaborators are injected explicitly; substituting in-memory fakes
/// is how the integration tests run whole batches.
pub struct CycleScheduler {
    store: Arc<dyn PersistenceStore>,
    market: Arc<dyn MarketDataProvider>,
    executor: Arc<OrderExecutor>,
    recalculator: Arc<PerformanceRecalculator>,
    config: CycleConfig,
    /// Shared round-robin cursor for ticker selection
    ticker_cursor: AtomicUsize,
}

impl CycleScheduler {
    pub fn new(
        store: Arc<dyn PersistenceStore>,
        market: Arc<dyn MarketDataProvider>,
        clock: Arc<dyn Clock>,
        config: CycleConfig,
    ) -> Self {
        let executor = Arc::new(OrderExecutor::new(store.clone(), clock.clone()));
        let recalculator = Arc::new(PerformanceRecalculator::new(
            store.clone(),
            clock,
            config.performance_seed,
        ));
        Self {
            store,
            market,
            executor,
            recalculator,
            config,
            ticker_cursor: AtomicUsize::new(0),
        }
    }

    /// Run one evaluation pass over all active agents
    ///
    /// Safe to call repeatedly. Every agent yields exactly one outcome;
    /// failures are isolated per agent.
    pub async fn run_cycle(&self) -> Result<BatchReport, CycleError> {
        let agents = self.store.active_agents().await?;
        if agents.is_empty() {
            log::info!("No active agents to evaluate");
            return Ok(BatchReport::default());
        }
        log::info!("Starting cycle over {} active agents", agents.len());

        let mut tasks: JoinSet<(usize, AgentOutcome)> = JoinSet::new();
        let mut indexed: Vec<(usize, AgentOutcome)> = Vec::with_capacity(agents.len());

        for (index, agent) in agents.into_iter().enumerate() {
            // Keep at most max_concurrency pipelines in flight
            while tasks.len() >= self.config.max_concurrency.max(1) {
                if let Some(joined) = tasks.join_next().await {
                    collect(&mut indexed, joined);
                }
            }

            let ticker = self.pick_ticker(&agent);
            let market = self.market.clone();
            let executor = self.executor.clone();
            let recalculator = self.recalculator.clone();
            let quote_timeout = self.config.quote_timeout;
            tasks.spawn(async move {
                let outcome = evaluate_agent(
                    agent,
                    ticker,
                    market,
                    executor,
                    recalculator,
                    quote_timeout,
                )
                .await;
                (index, outcome)
            });
        }
        while let Some(joined) = tasks.join_next().await {
            collect(&mut indexed, joined);
        }

        indexed.sort_by_key(|(index, _)| *index);
        let results: Vec<AgentOutcome> = indexed.into_iter().map(|(_, o)| o).collect();
        let report = BatchReport {
            processed: results.len(),
            results,
        };
        log::info!(
            "Cycle complete: {} processed, {} executed, {} held, {} failed",
            report.processed,
            report.executed(),
            report.held(),
            report.failed()
        );
        Ok(report)
    }

    /// Deterministic round-robin over the strategy's recommended tickers
    fn pick_ticker(&self, agent: &Agent) -> String {
        let tickers = plutus_strategy::recommended_tickers(agent.strategy);
        let cursor = self.ticker_cursor.fetch_add(1, Ordering::Relaxed);
        tickers[cursor % tickers.len()].to_string()
    }
}

fn collect(
    indexed: &mut Vec<(usize, AgentOutcome)>,
    joined: Result<(usize, AgentOutcome), tokio::task::JoinError>,
) {
    match joined {
        Ok(entry) => indexed.push(entry),
        // A panicking pipeline loses its slot in the report; everything the
        // pipeline does on purpose is reported through AgentOutcome instead
        Err(e) => log::error!("Agent pipeline task failed: {e}"),
    }
}

/// One agent's full pipeline, run to a terminal outcome
async fn evaluate_agent(
    agent: Agent,
    ticker: String,
    market: Arc<dyn MarketDataProvider>,
    executor: Arc<OrderExecutor>,
    recalculator: Arc<PerformanceRecalculator>,
    quote_timeout: Duration,
) -> AgentOutcome {
    let quote = match tokio::time::timeout(quote_timeout, market.quote(&ticker)).await {
        Ok(Ok(quote)) => quote,
        Ok(Err(e)) => {
            log::warn!("[{}] Quote failed for {ticker}: {e}", agent.id);
            return AgentOutcome::failure(&agent, &ticker, e.to_string());
        }
        Err(_) => {
            log::warn!(
                "[{}] Quote for {ticker} timed out after {quote_timeout:?}",
                agent.id
            );
            return AgentOutcome::failure(
                &agent,
                &ticker,
                format!("quote timed out after {quote_timeout:?}"),
            );
        }
    };

    let signal = plutus_strategy::generate(&agent, &quote);
    log::debug!(
        "[{}] {} on {ticker}: {} (confidence {})",
        agent.id,
        agent.strategy.map(|s| s.as_str()).unwrap_or("unset"),
        signal.action,
        signal.confidence
    );

    // Gate: act only on non-hold signals with enough conviction for this
    // agent's risk tolerance
    let side = signal.action.to_side();
    let confident = signal.confidence >= agent.risk_tolerance.confidence_floor();
    let Some(side) = side.filter(|_| confident) else {
        return AgentOutcome::held(&agent, &ticker, &signal);
    };

    let request = TradeRequest {
        agent_id: agent.id,
        ticker: ticker.clone(),
        side,
        quantity: signal.suggested_quantity.unwrap_or(1).max(1),
        price: quote.price,
        reasoning: Some(signal.reasoning.clone()),
    };
    match executor.execute(request).await {
        Ok(execution) => {
            // Aggregates refresh best-effort; the executed trade stands
            // either way and the next recompute heals any gap
            if let Err(e) = recalculator.recompute(agent.id).await {
                log::warn!("[{}] Performance recompute failed: {e}", agent.id);
            }
            AgentOutcome::executed(&agent, &ticker, &signal, &execution)
        }
        Err(e) => {
            log::warn!("[{}] Execution failed on {ticker}: {e}", agent.id);
            AgentOutcome::failure(&agent, &ticker, e.to_string())
        }
    }
}
