use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::nullable::or_default;

/// Price snapshot of a coin in one currency.
///
/// Newly listed or inactive coins come back with some of these fields
/// missing or `null`; they decode as zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default, deserialize_with = "or_default")]
    pub price: f64,

    #[serde(default, deserialize_with = "or_default")]
    pub volume_24h: f64,

    #[serde(default, deserialize_with = "or_default")]
    pub volume_change_24h: f64,

    #[serde(default, deserialize_with = "or_default")]
    pub percent_change_1h: f64,

    #[serde(default, deserialize_with = "or_default")]
    pub percent_change_24h: f64,

    #[serde(default, deserialize_with = "or_default")]
    pub percent_change_7d: f64,

    #[serde(default, deserialize_with = "or_default")]
    pub percent_change_30d: f64,

    #[serde(default, deserialize_with = "or_default")]
    pub market_cap: f64,

    /// Share of the total market capitalization, in percent
    #[serde(default, deserialize_with = "or_default")]
    pub market_cap_dominance: f64,

    #[serde(default, deserialize_with = "or_default")]
    pub fully_diluted_market_cap: f64,

    /// When the provider last refreshed this quote
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}
