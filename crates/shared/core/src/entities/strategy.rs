use serde::{Deserialize, Serialize};

/// The fixed set of trading strategies an agent can be configured with
///
/// Each variant maps to one rule set in the signal generator. Agents loaded
/// from the store may carry an unknown or empty strategy string; those parse
/// to `None` and always produce a neutral hold signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Momentum,
    MeanReversion,
    Value,
    Growth,
    Dividend,
    Arbitrage,
    Swing,
    Scalping,
    Breakout,
    Contrarian,
}

impl StrategyKind {
    /// All strategy kinds, in dispatch order
    pub const ALL: [StrategyKind; 10] = [
        StrategyKind::Momentum,
        StrategyKind::MeanReversion,
        StrategyKind::Value,
        StrategyKind::Growth,
        StrategyKind::Dividend,
        StrategyKind::Arbitrage,
        StrategyKind::Swing,
        StrategyKind::Scalping,
        StrategyKind::Breakout,
        StrategyKind::Contrarian,
    ];

    /// Parse a stored strategy-type string
    ///
    /// Accepts both the short names and the long `*_investing`/`*_trading`
    /// forms used by older agent records. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "momentum" => Some(StrategyKind::Momentum),
            "mean_reversion" => Some(StrategyKind::MeanReversion),
            "value" | "value_investing" => Some(StrategyKind::Value),
            "growth" | "growth_investing" => Some(StrategyKind::Growth),
            "dividend" | "dividend_investing" => Some(StrategyKind::Dividend),
            "arbitrage" => Some(StrategyKind::Arbitrage),
            "swing" | "swing_trading" => Some(StrategyKind::Swing),
            "scalping" => Some(StrategyKind::Scalping),
            "breakout" => Some(StrategyKind::Breakout),
            "contrarian" => Some(StrategyKind::Contrarian),
            _ => None,
        }
    }

    /// Canonical snake_case name, as stored and logged
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Momentum => "momentum",
            StrategyKind::MeanReversion => "mean_reversion",
            StrategyKind::Value => "value",
            StrategyKind::Growth => "growth",
            StrategyKind::Dividend => "dividend",
            StrategyKind::Arbitrage => "arbitrage",
            StrategyKind::Swing => "swing",
            StrategyKind::Scalping => "scalping",
            StrategyKind::Breakout => "breakout",
            StrategyKind::Contrarian => "contrarian",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_and_long_forms() {
        assert_eq!(StrategyKind::parse("momentum"), Some(StrategyKind::Momentum));
        assert_eq!(StrategyKind::parse("value"), Some(StrategyKind::Value));
        assert_eq!(
            StrategyKind::parse("value_investing"),
            Some(StrategyKind::Value)
        );
        assert_eq!(
            StrategyKind::parse("swing_trading"),
            Some(StrategyKind::Swing)
        );
        assert_eq!(StrategyKind::parse("llm_vibes"), None);
        assert_eq!(StrategyKind::parse(""), None);
    }

    #[test]
    fn test_roundtrip_canonical_names() {
        for kind in StrategyKind::ALL {
            assert_eq!(StrategyKind::parse(kind.as_str()), Some(kind));
        }
    }
}
