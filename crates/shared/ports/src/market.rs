use async_trait::async_trait;
use plutus_core::Quote;

use crate::error::MarketDataResult;

/// Port for the market data collaborator
///
/// Read-only and allowed to fail transiently; callers tolerate failures by
/// holding or marking the agent's cycle as failed rather than crashing the
/// batch.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch the current snapshot for one ticker
    async fn quote(&self, ticker: &str) -> MarketDataResult<Quote>;
}
