use plutus_core::StrategyKind;

/// Liquid fallback basket for agents with an unknown or unset strategy
pub const DEFAULT_BASKET: &[&str] = &["SPY", "QQQ", "AAPL", "MSFT", "TSLA"];

/// Candidate tickers suited to each strategy's rule shape
///
/// The scheduler round-robins over the returned slice when picking the
/// symbol an agent evaluates in a cycle.
pub fn recommended_tickers(strategy: Option<StrategyKind>) -> &'static [&'static str] {
    let Some(strategy) = strategy else {
        return DEFAULT_BASKET;
    };
    match strategy {
        StrategyKind::Momentum => &["AAPL", "TSLA", "NVDA", "MSFT", "GOOGL"],
        StrategyKind::MeanReversion => &["SPY", "QQQ", "IWM", "VTI", "VOO"],
        StrategyKind::Value => &["BRK.B", "JPM", "JNJ", "PG", "KO"],
        StrategyKind::Growth => &["AMZN", "META", "NFLX", "CRM", "SHOP"],
        StrategyKind::Dividend => &["REYN", "T", "VZ", "XOM", "CVX"],
        StrategyKind::Arbitrage => &["SPY", "QQQ", "GLD", "TLT", "VIX"],
        StrategyKind::Swing => &["AMD", "BABA", "UBER", "SNAP", "ZM"],
        StrategyKind::Scalping => &["SPY", "QQQ", "TQQQ", "SQQQ", "SPXL"],
        StrategyKind::Breakout => &["MEME", "GME", "AMC", "COIN", "HOOD"],
        StrategyKind::Contrarian => &["VIX", "UVXY", "SQQQ", "SPXS", "TZA"],
    }
}
