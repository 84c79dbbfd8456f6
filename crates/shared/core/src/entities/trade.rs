use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AgentId;

/// Unique identifier for a trade
pub type TradeId = Uuid;

/// Executable trade side (the non-hold signal actions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeSide {
    Buy,
    Sell,
    SellShort,
    BuyToCover,
}

impl TradeSide {
    /// True for sides that spend capital and therefore require a capital check
    pub fn requires_capital(&self) -> bool {
        matches!(self, TradeSide::Buy | TradeSide::BuyToCover)
    }

    /// Signed cash flow this side produces for a given trade value
    ///
    /// Buys and covers spend cash; sells and shorts raise it. Short-sale
    /// margin requirements are deliberately not modeled.
    pub fn cash_flow(&self, value: Decimal) -> Decimal {
        match self {
            TradeSide::Buy | TradeSide::BuyToCover => -value,
            TradeSide::Sell | TradeSide::SellShort => value,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
            TradeSide::SellShort => "sell_short",
            TradeSide::BuyToCover => "buy_to_cover",
        }
    }
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trade record status
///
/// Paper execution fills atomically, so every persisted trade is Executed;
/// the variant exists so the ledger schema can grow partial fills later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeStatus {
    Executed,
}

/// One executed paper trade
///
/// Immutable once created. The append-only sequence of these records is the
/// ledger from which agent capital and performance are derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: TradeId,
    pub agent_id: AgentId,
    pub ticker: String,
    pub side: TradeSide,
    pub quantity: u64,
    pub price: Decimal,
    /// quantity x price at execution
    pub total_value: Decimal,
    pub status: TradeStatus,
    pub executed_at: DateTime<Utc>,
    pub reasoning: Option<String>,
}

impl TradeRecord {
    /// Create an executed trade record with an explicit timestamp
    pub fn new(
        agent_id: AgentId,
        ticker: impl Into<String>,
        side: TradeSide,
        quantity: u64,
        price: Decimal,
        executed_at: DateTime<Utc>,
        reasoning: Option<String>,
    ) -> Self {
        let ticker: String = ticker.into();
        Self {
            id: Uuid::new_v4(),
            agent_id,
            ticker: ticker.to_uppercase(),
            side,
            quantity,
            price,
            total_value: Decimal::from(quantity) * price,
            status: TradeStatus::Executed,
            executed_at,
            reasoning,
        }
    }

    /// Signed cash flow of this trade against the agent's capital
    pub fn cash_flow(&self) -> Decimal {
        self.side.cash_flow(self.total_value)
    }
}
