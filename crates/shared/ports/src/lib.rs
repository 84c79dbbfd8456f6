//! Plutus Ports
//!
//! Port definitions (traits) for the Plutus paper-trading engine.
//! These define the boundaries between domain logic and the external
//! collaborators: the market data provider, the persistence store, and
//! the time source.

mod clock;
mod error;
mod market;
mod store;

pub use clock::Clock;
pub use error::{MarketDataError, MarketDataResult, StoreError, StoreResult};
pub use market::MarketDataProvider;
pub use store::PersistenceStore;
