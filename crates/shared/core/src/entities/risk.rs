use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Agent risk appetite
///
/// Scales both strategy trigger thresholds (higher tolerance fires earlier)
/// and position sizing / the confidence gate in the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    /// Position-size multiplier applied to a strategy's base risk fraction
    pub fn size_multiplier(&self) -> Decimal {
        match self {
            RiskTolerance::Low => dec!(0.5),
            RiskTolerance::Medium => dec!(1.0),
            RiskTolerance::High => dec!(1.5),
        }
    }

    /// Minimum signal confidence required before a signal is acted upon
    ///
    /// Lower tolerance demands more conviction.
    pub fn confidence_floor(&self) -> Decimal {
        match self {
            RiskTolerance::Low => dec!(0.7),
            RiskTolerance::Medium => dec!(0.5),
            RiskTolerance::High => dec!(0.3),
        }
    }
}
