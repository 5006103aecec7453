//! Quotes provider trait definition.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::Coin;

/// Source of the latest coin quotes.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use crypto2influx_market_data::provider::QuotesProvider;
///
/// struct FixedProvider(BTreeMap<u64, Coin>);
///
/// #[async_trait]
/// impl QuotesProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_quotes(&self, _slugs: &[String]) -> Result<BTreeMap<u64, Coin>, MarketDataError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait QuotesProvider: Send + Sync {
    /// Constant identifier like "COINMARKETCAP", used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch the latest quotes for the given slugs in a single request.
    ///
    /// The result is keyed by the provider's numeric coin id. It may hold
    /// fewer coins than requested (unknown slugs are dropped by the
    /// provider); that is not an error.
    async fn fetch_quotes(&self, slugs: &[String]) -> Result<BTreeMap<u64, Coin>, MarketDataError>;
}
