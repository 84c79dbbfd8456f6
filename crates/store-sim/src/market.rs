use async_trait::async_trait;
use dashmap::{DashMap, DashSet};
use plutus_core::Quote;
use plutus_ports::{MarketDataError, MarketDataProvider, MarketDataResult};
use rust_decimal::Decimal;

/// Market data provider serving scripted quotes
///
/// Tickers without a scripted quote, and tickers explicitly marked
/// unavailable, fail with `QuoteUnavailable` the way a flaky upstream would.
pub struct ScriptedMarketData {
    quotes: DashMap<String, Quote>,
    unavailable: DashSet<String>,
}

impl ScriptedMarketData {
    pub fn new() -> Self {
        Self {
            quotes: DashMap::new(),
            unavailable: DashSet::new(),
        }
    }

    /// Script the quote returned for its ticker
    pub fn set_quote(&self, quote: Quote) {
        self.unavailable.remove(&quote.ticker);
        self.quotes.insert(quote.ticker.clone(), quote);
    }

    /// Script the same quote shape for every ticker in a basket
    pub fn set_basket(&self, tickers: &[&str], template: Quote) {
        for ticker in tickers {
            let mut quote = template.clone();
            quote.ticker = ticker.to_string();
            self.set_quote(quote);
        }
    }

    /// Mark a ticker as transiently unavailable
    pub fn set_unavailable(&self, ticker: &str) {
        self.unavailable.insert(ticker.to_string());
    }

    /// Convenience: a plausible quote with the given price and move
    pub fn quote_with_change(ticker: &str, price: Decimal, change_percent: Decimal) -> Quote {
        let previous_close = price / (Decimal::ONE + change_percent / Decimal::ONE_HUNDRED);
        Quote {
            ticker: ticker.to_string(),
            price,
            change: price - previous_close,
            change_percent,
            volume: 2_000_000,
            high: price.max(previous_close),
            low: price.min(previous_close),
            open: previous_close,
            previous_close,
        }
    }
}

impl Default for ScriptedMarketData {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for ScriptedMarketData {
    async fn quote(&self, ticker: &str) -> MarketDataResult<Quote> {
        if self.unavailable.contains(ticker) {
            return Err(MarketDataError::unavailable(ticker, "scripted outage"));
        }
        self.quotes
            .get(ticker)
            .map(|q| q.clone())
            .ok_or_else(|| MarketDataError::unavailable(ticker, "no scripted quote"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_scripted_quote_roundtrip() {
        let market = ScriptedMarketData::new();
        market.set_quote(ScriptedMarketData::quote_with_change(
            "AAPL",
            dec!(104),
            dec!(4),
        ));

        let quote = market.quote("AAPL").await.unwrap();
        assert_eq!(quote.change_percent, dec!(4));
        assert_eq!(quote.previous_close, dec!(100));
    }

    #[tokio::test]
    async fn test_outage_and_missing_ticker_fail() {
        let market = ScriptedMarketData::new();
        market.set_quote(ScriptedMarketData::quote_with_change(
            "TSLA",
            dec!(200),
            dec!(1),
        ));
        market.set_unavailable("TSLA");

        assert!(market.quote("TSLA").await.is_err());
        assert!(market.quote("NVDA").await.is_err());
    }
}
