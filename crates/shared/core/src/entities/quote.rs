use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point-in-time market snapshot for one ticker
///
/// Ephemeral: fetched fresh each cycle and never persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub ticker: String,
    /// Last traded price
    pub price: Decimal,
    /// Absolute change versus previous close
    pub change: Decimal,
    /// Percent change versus previous close (e.g. 4.2 = +4.2%)
    pub change_percent: Decimal,
    pub volume: u64,
    /// Day high
    pub high: Decimal,
    /// Day low
    pub low: Decimal,
    pub open: Decimal,
    pub previous_close: Decimal,
}

impl Quote {
    /// Where the last price sits inside the day range, as a fraction in [0, 1]
    ///
    /// `None` when the day range is empty (high <= low), in which case
    /// range-based rules cannot fire.
    pub fn range_position(&self) -> Option<Decimal> {
        let range = self.high - self.low;
        if range <= Decimal::ZERO {
            return None;
        }
        Some((self.price - self.low) / range)
    }

    /// Gap between last price and previous close, as a percent of the close
    ///
    /// `None` when the previous close is zero or negative.
    pub fn gap_percent(&self) -> Option<Decimal> {
        if self.previous_close <= Decimal::ZERO {
            return None;
        }
        Some((self.price - self.previous_close).abs() / self.previous_close * Decimal::ONE_HUNDRED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn quote(price: Decimal, low: Decimal, high: Decimal) -> Quote {
        Quote {
            ticker: "SPY".to_string(),
            price,
            change: Decimal::ZERO,
            change_percent: Decimal::ZERO,
            volume: 0,
            high,
            low,
            open: low,
            previous_close: price,
        }
    }

    #[test]
    fn test_range_position() {
        let q = quote(dec!(105), dec!(100), dec!(110));
        assert_eq!(q.range_position(), Some(dec!(0.5)));

        let at_low = quote(dec!(100), dec!(100), dec!(110));
        assert_eq!(at_low.range_position(), Some(Decimal::ZERO));
    }

    #[test]
    fn test_range_position_empty_range() {
        let q = quote(dec!(100), dec!(100), dec!(100));
        assert_eq!(q.range_position(), None);
    }

    #[test]
    fn test_gap_percent() {
        let mut q = quote(dec!(101), dec!(99), dec!(102));
        q.previous_close = dec!(100);
        assert_eq!(q.gap_percent(), Some(dec!(1)));

        q.previous_close = Decimal::ZERO;
        assert_eq!(q.gap_percent(), None);
    }
}
