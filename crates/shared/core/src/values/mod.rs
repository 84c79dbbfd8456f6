use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Monetary value - uses Decimal for precision
/// Future: could become a newtype with currency awareness
pub type Money = Decimal;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;

/// Ticker symbol for a tradeable instrument
pub type Symbol = String;
