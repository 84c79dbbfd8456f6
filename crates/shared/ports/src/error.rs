use plutus_core::AgentId;
use thiserror::Error;

/// Errors from the market data collaborator
///
/// All of these are transient from the engine's point of view: the affected
/// agent's cycle fails soft and the batch continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketDataError {
    #[error("Quote unavailable for {ticker}: {reason}")]
    QuoteUnavailable { ticker: String, reason: String },
}

impl MarketDataError {
    /// Convenience constructor for the common transient-failure case
    pub fn unavailable(ticker: impl Into<String>, reason: impl Into<String>) -> Self {
        MarketDataError::QuoteUnavailable {
            ticker: ticker.into(),
            reason: reason.into(),
        }
    }
}

pub type MarketDataResult<T> = std::result::Result<T, MarketDataError>;

/// Errors from the persistence collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The referenced agent does not exist (data integrity - skip the agent)
    #[error("Agent not found: {0}")]
    AgentNotFound(AgentId),

    /// Backend write/read failure - reported per agent, never swallowed
    #[error("Store backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
