use tracing::debug;

use super::config_model::{CoinPosition, Config, TrackedCoin};

/// Configuration values given as flags or environment variables.
///
/// `None` and empty strings leave the underlying value alone.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub coinmarketcap_token: Option<String>,
    pub influx_url: Option<String>,
    pub influx_token: Option<String>,
    pub influx_org: Option<String>,
    pub influx_bucket: Option<String>,
    pub coins: Vec<CoinPosition>,
}

impl Config {
    /// Build a configuration from flags alone.
    pub fn from_overrides(overrides: ConfigOverrides) -> Self {
        Self::default().merge(overrides)
    }

    /// Layer flag values over this configuration.
    ///
    /// Coins given on the command line set the legacy position of the
    /// tracked coin with that slug, adding the coin when it is not tracked
    /// yet. Configured investment lots are kept. When several entries share
    /// the slug, the position goes to the one [`Config::tracked_by_slug`]
    /// keeps.
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        apply(&mut self.coinmarketcap.token, overrides.coinmarketcap_token);
        apply(&mut self.influxcloud.url, overrides.influx_url);
        apply(&mut self.influxcloud.token, overrides.influx_token);
        apply(&mut self.influxcloud.org, overrides.influx_org);
        apply(&mut self.influxcloud.bucket, overrides.influx_bucket);

        for coin in overrides.coins {
            let existing_key = self
                .coins
                .iter()
                .rev()
                .find(|(key, tracked)| tracked.slug_or(key) == coin.slug)
                .map(|(key, _)| key.clone());
            let key = existing_key.unwrap_or_else(|| coin.slug.clone());
            debug!("Position for '{}' set from command line", coin.slug);
            self.coins
                .entry(key)
                .or_insert_with(TrackedCoin::default)
                .position = Some(coin.position);
        }

        self
    }
}

fn apply(target: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        *target = value;
    }
}
