use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::calendar_date;
use super::config_errors::ConfigError;
use crate::constants::DEFAULT_INFLUX_URL;
use crate::utils::time_utils::start_of_day_utc;

/// Run configuration: provider credential, database coordinates and the
/// coins to track.
///
/// Loaded once at start-up and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub coinmarketcap: CoinMarketCapConfig,

    #[serde(default)]
    pub influxcloud: InfluxConfig,

    /// Tracked coins keyed by slug
    #[serde(default)]
    pub coins: BTreeMap<String, TrackedCoin>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinMarketCapConfig {
    #[serde(default)]
    pub token: String,
}

/// InfluxDB v2 connection coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfluxConfig {
    #[serde(default = "default_influx_url")]
    pub url: String,

    #[serde(default)]
    pub token: String,

    /// Organization name
    #[serde(default)]
    pub org: String,

    #[serde(default)]
    pub bucket: String,
}

impl Default for InfluxConfig {
    fn default() -> Self {
        Self {
            url: default_influx_url(),
            token: String::new(),
            org: String::new(),
            bucket: String::new(),
        }
    }
}

fn default_influx_url() -> String {
    DEFAULT_INFLUX_URL.to_string()
}

/// A coin to fetch, with the lots bought of it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackedCoin {
    /// Provider slug; empty means "same as the map key"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub slug: String,

    /// Single holding used by the legacy combined record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// Investment lots keyed by a caller-chosen id (e.g. venue + sequence)
    #[serde(default)]
    pub investments: BTreeMap<String, Investment>,
}

impl TrackedCoin {
    /// The slug this entry matches, given the key it is stored under.
    pub fn slug_or<'a>(&'a self, key: &'a str) -> &'a str {
        if self.slug.is_empty() {
            key
        } else {
            &self.slug
        }
    }

    /// Total amount over all lots at the cost-weighted average buy price.
    pub fn aggregate_position(&self) -> Position {
        let amount: f64 = self.investments.values().map(|lot| lot.amount).sum();
        let cost: f64 = self
            .investments
            .values()
            .map(|lot| lot.buy_price * lot.amount)
            .sum();
        let buy_price = if amount == 0.0 { 0.0 } else { cost / amount };
        Position { buy_price, amount }
    }
}

/// Buy price and amount of a holding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub buy_price: f64,
    pub amount: f64,
}

/// A purchase of a coin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub buy_price: f64,

    pub amount: f64,

    /// Acquisition date, `YYYY-MM-DD`
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,

    /// Venue the lot was bought on
    #[serde(default)]
    pub platform: String,
}

impl Investment {
    /// Acquisition instant: midnight UTC of the acquisition date.
    pub fn acquired_at(&self) -> DateTime<Utc> {
        start_of_day_utc(self.date)
    }
}

/// A coin given on the command line as `slug:buyPrice:amount`.
#[derive(Clone, Debug, PartialEq)]
pub struct CoinPosition {
    pub slug: String,
    pub position: Position,
}

impl FromStr for CoinPosition {
    type Err = ConfigError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ConfigError::InvalidCoinSpec {
            spec: spec.to_string(),
            reason,
        };

        let fields: Vec<&str> = spec.split(':').collect();
        let [slug, buy_price, amount] = fields.as_slice() else {
            return Err(invalid(format!(
                "expected <slug>:<buy_price>:<amount>, got {} fields",
                fields.len()
            )));
        };

        let slug = slug.trim();
        if slug.is_empty() {
            return Err(invalid("slug is empty".to_string()));
        }
        let buy_price = buy_price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| invalid(format!("buy price '{}' is not a number", buy_price)))?;
        let amount = amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| invalid(format!("amount '{}' is not a number", amount)))?;

        Ok(Self {
            slug: slug.to_string(),
            position: Position { buy_price, amount },
        })
    }
}

impl Config {
    /// Read and parse a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded configuration from {}", path.display());
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Tracked coins indexed by their effective slug.
    ///
    /// Two entries resolving to the same slug silently collapse into one:
    /// the entry whose key sorts last wins.
    pub fn tracked_by_slug(&self) -> BTreeMap<&str, &TrackedCoin> {
        let mut by_slug = BTreeMap::new();
        for (key, coin) in &self.coins {
            let slug = coin.slug_or(key);
            if by_slug.insert(slug, coin).is_some() {
                debug!("Duplicate slug '{}' in configuration, keeping entry '{}'", slug, key);
            }
        }
        by_slug
    }

    /// Sorted, de-duplicated slugs to request from the provider.
    pub fn slugs(&self) -> Vec<String> {
        self.tracked_by_slug()
            .into_keys()
            .map(str::to_string)
            .collect()
    }

    /// Check that the run has everything it needs.
    ///
    /// `require_sink` is false for dry runs, which never talk to InfluxDB.
    pub fn validate(&self, require_sink: bool) -> Result<(), ConfigError> {
        if self.coinmarketcap.token.trim().is_empty() {
            return Err(ConfigError::MissingValue("coinmarketcap.token"));
        }
        if self.coins.is_empty() {
            return Err(ConfigError::NoCoins);
        }
        if require_sink {
            let influx = &self.influxcloud;
            let required = [
                ("influxcloud.url", &influx.url),
                ("influxcloud.token", &influx.token),
                ("influxcloud.org", &influx.org),
                ("influxcloud.bucket", &influx.bucket),
            ];
            if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
                return Err(ConfigError::MissingValue(*name));
            }
        }
        Ok(())
    }
}
