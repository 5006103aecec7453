use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::nullable::or_default;
use super::platform::Platform;
use super::quote::Quote;
use crate::errors::MarketDataError;

/// Currency code of the only quote this crate's consumers read.
pub const USD: &str = "USD";

/// A cryptocurrency as reported by the quotes provider.
///
/// `symbol` is not unique across coins (wrapped tokens reuse tickers); `slug`
/// is, and it is the key used to match coins against configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Provider-assigned identifier
    pub id: u64,

    #[serde(default, deserialize_with = "or_default")]
    pub name: String,

    #[serde(default, deserialize_with = "or_default")]
    pub symbol: String,

    #[serde(default, deserialize_with = "or_default")]
    pub slug: String,

    /// 1 when the coin is actively traded, 0 otherwise
    #[serde(default, deserialize_with = "or_default")]
    pub is_active: i64,

    /// 1 when the entry is a fiat currency, 0 otherwise
    #[serde(default, deserialize_with = "or_default")]
    pub is_fiat: i64,

    #[serde(default, deserialize_with = "or_default")]
    pub circulating_supply: f64,

    #[serde(default, deserialize_with = "or_default")]
    pub total_supply: f64,

    /// Zero when the supply is uncapped
    #[serde(default, deserialize_with = "or_default")]
    pub max_supply: f64,

    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "or_default")]
    pub num_market_pairs: i64,

    #[serde(default, deserialize_with = "or_default")]
    pub cmc_rank: i64,

    /// Provider-reported time of the last update
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "or_default")]
    pub tags: Vec<String>,

    /// Blockchain platform metadata; its shape varies per coin, see
    /// [`Coin::platform`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Value>,

    /// Quotes keyed by currency code
    #[serde(default, deserialize_with = "or_default")]
    pub quote: HashMap<String, Quote>,
}

impl Coin {
    /// The USD quote, if the provider returned one.
    pub fn usd_quote(&self) -> Option<&Quote> {
        self.quote.get(USD)
    }

    pub fn is_active(&self) -> bool {
        self.is_active != 0
    }

    pub fn is_fiat(&self) -> bool {
        self.is_fiat != 0
    }

    /// Decodes the platform metadata on demand.
    ///
    /// Returns `Ok(None)` for native coins (platform absent or `null`).
    pub fn platform(&self) -> Result<Option<Platform>, MarketDataError> {
        match &self.platform {
            None | Some(Value::Null) => Ok(None),
            Some(value @ Value::Object(_)) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| MarketDataError::decode("platform", e)),
            Some(other) => Err(MarketDataError::decode(
                "platform",
                format!("expected an object, got {}", other),
            )),
        }
    }
}
