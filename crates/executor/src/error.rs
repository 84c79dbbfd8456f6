//! Executor errors

use plutus_core::{AgentId, TradeId};
use plutus_ports::StoreError;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExecutorError {
    #[error("Invalid quantity: must be greater than zero")]
    InvalidQuantity,

    #[error("Invalid price: {price} (must be greater than zero)")]
    InvalidPrice { price: Decimal },

    #[error("Agent not found: {0}")]
    AgentNotFound(AgentId),

    /// Business-rule rejection, not an exceptional path: the trade is
    /// declined before anything is persisted
    #[error("Insufficient capital: required {required}, available {available}")]
    InsufficientCapital {
        required: Decimal,
        available: Decimal,
    },

    /// The trade persisted but the capital write failed. The ledger remains
    /// authoritative; capital can be reconciled from it.
    #[error("Capital update failed after trade {trade_id} was recorded: {source}")]
    CapitalUpdateFailed {
        trade_id: TradeId,
        source: StoreError,
    },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, ExecutorError>;
