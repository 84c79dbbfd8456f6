//! Performance recomputation
//!
//! Aggregates are always rebuilt from the full executed-trade ledger, never
//! updated incrementally, so a lost or replayed recompute can't drift the
//! counters. P&L uses the placeholder per-side model inherited from the
//! paper design: sell-type trades realize a sampled 1-3% margin, buy-type
//! trades pay a 0.1% transaction cost. Real lot-matched P&L would replace
//! this model wholesale.

use plutus_core::{AgentId, PerformanceMetrics, TradeRecord, TradeSide};
use plutus_ports::{Clock, PersistenceStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::Result;

/// Flat cost charged against buy-type trades
const TRANSACTION_COST: Decimal = dec!(0.001);

/// Recomputes and upserts one agent's performance snapshot
///
/// The margin sampler is a seeded RNG injected at construction, so two
/// recalculators built with the same seed produce identical P&L for the
/// same ledger.
pub struct PerformanceRecalculator {
    store: Arc<dyn PersistenceStore>,
    clock: Arc<dyn Clock>,
    rng: Mutex<StdRng>,
}

impl PerformanceRecalculator {
    pub fn new(store: Arc<dyn PersistenceStore>, clock: Arc<dyn Clock>, seed: u64) -> Self {
        Self {
            store,
            clock,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Rebuild the agent's aggregates from its executed-trade history
    ///
    /// Returns `Ok(None)` without writing anything when the ledger is empty.
    pub async fn recompute(&self, agent_id: AgentId) -> Result<Option<PerformanceMetrics>> {
        let trades = self.store.executed_trades(agent_id).await?;
        if trades.is_empty() {
            return Ok(None);
        }

        let metrics = {
            let mut rng = self.rng.lock().await;
            fold_metrics(agent_id, &trades, &mut *rng, self.clock.now())
        };

        self.store.upsert_performance(metrics.clone()).await?;
        log::debug!(
            "[{agent_id}] Performance recomputed: {} trades, win rate {:.1}%",
            metrics.total_trades,
            metrics.win_rate
        );
        Ok(Some(metrics))
    }
}

/// Fold the ledger into aggregate counters
///
/// Structural counters (trade count, wins, volume) depend only on the
/// ledger; total P&L additionally depends on the sampled margins.
fn fold_metrics(
    agent_id: AgentId,
    trades: &[TradeRecord],
    rng: &mut impl Rng,
    calculated_at: chrono::DateTime<chrono::Utc>,
) -> PerformanceMetrics {
    let mut total_pnl = Decimal::ZERO;
    let mut winning_trades = 0u64;
    let mut total_volume = Decimal::ZERO;

    for trade in trades {
        total_volume += trade.total_value;
        match trade.side {
            TradeSide::Sell | TradeSide::SellShort => {
                // Sampled profit margin in whole basis points, 1-3%
                let margin_bps: i64 = rng.gen_range(100..=300);
                total_pnl += trade.total_value * Decimal::new(margin_bps, 4);
                winning_trades += 1;
            }
            TradeSide::Buy | TradeSide::BuyToCover => {
                total_pnl -= trade.total_value * TRANSACTION_COST;
            }
        }
    }

    let total_trades = trades.len() as u64;
    let win_rate =
        Decimal::from(winning_trades) / Decimal::from(total_trades) * Decimal::ONE_HUNDRED;

    PerformanceMetrics {
        agent_id,
        total_trades,
        winning_trades,
        total_pnl,
        win_rate,
        total_volume,
        calculated_at,
    }
}
