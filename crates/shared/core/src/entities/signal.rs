use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::TradeSide;

/// Recommended action for one agent in one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalAction {
    Buy,
    Sell,
    SellShort,
    BuyToCover,
    Hold,
}

impl SignalAction {
    /// Executable side for this action, `None` for hold
    pub fn to_side(&self) -> Option<TradeSide> {
        match self {
            SignalAction::Buy => Some(TradeSide::Buy),
            SignalAction::Sell => Some(TradeSide::Sell),
            SignalAction::SellShort => Some(TradeSide::SellShort),
            SignalAction::BuyToCover => Some(TradeSide::BuyToCover),
            SignalAction::Hold => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalAction::Buy => "buy",
            SignalAction::Sell => "sell",
            SignalAction::SellShort => "sell_short",
            SignalAction::BuyToCover => "buy_to_cover",
            SignalAction::Hold => "hold",
        }
    }
}

impl std::fmt::Display for SignalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the signal generator: action plus conviction and context
///
/// Transient - produced and consumed within a single evaluation cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeSignal {
    pub action: SignalAction,
    /// Conviction in [0, 1]; gated against `RiskTolerance::confidence_floor`
    pub confidence: Decimal,
    /// Human-readable trigger description
    pub reasoning: String,
    /// Position-sizer suggestion; absent for hold signals
    pub suggested_quantity: Option<u64>,
}

impl TradeSignal {
    /// Create a signal, clamping confidence into [0, 1]
    pub fn new(action: SignalAction, confidence: Decimal, reasoning: impl Into<String>) -> Self {
        Self {
            action,
            confidence: confidence.clamp(Decimal::ZERO, Decimal::ONE),
            reasoning: reasoning.into(),
            suggested_quantity: None,
        }
    }

    /// Builder: attach the suggested quantity
    pub fn with_quantity(mut self, quantity: u64) -> Self {
        self.suggested_quantity = Some(quantity);
        self
    }

    /// The neutral signal emitted when no rule triggers
    pub fn hold() -> Self {
        Self::new(
            SignalAction::Hold,
            dec!(0.5),
            "No clear signal detected, maintaining current position",
        )
    }

    /// True when the action is anything but hold
    pub fn is_actionable(&self) -> bool {
        self.action != SignalAction::Hold
    }
}
