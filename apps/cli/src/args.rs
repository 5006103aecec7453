use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use crypto2influx_core::config::{CoinPosition, ConfigOverrides};

/// Log output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// CLI surface (env-aware). Long flags + .env supported.
#[derive(Parser, Debug)]
#[command(
    name = "crypto2influx",
    version,
    about = "Write CoinMarketCap quotes and investment lots to InfluxDB"
)]
pub struct Args {
    /// JSON configuration file with credentials, coins and investments
    #[arg(
        short = 'f',
        long = "config",
        env = "CRYPTO2INFLUX_CONFIG",
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    /// Coin to track as <slug>:<buy_price>:<amount>; may be repeated
    #[arg(short = 'c', long = "coin", value_name = "SLUG:BUY:AMOUNT")]
    pub coins: Vec<CoinPosition>,

    /// CoinMarketCap API key
    #[arg(long, env = "COINMARKETCAP_TOKEN", hide_env_values = true)]
    pub coinmarketcap_token: Option<String>,

    /// InfluxDB base URL
    #[arg(long, env = "INFLUX_URL", value_hint = ValueHint::Url)]
    pub influx_url: Option<String>,

    /// InfluxDB API token
    #[arg(long, env = "INFLUX_TOKEN", hide_env_values = true)]
    pub influx_token: Option<String>,

    /// InfluxDB organization
    #[arg(long, env = "INFLUX_ORG")]
    pub influx_org: Option<String>,

    /// InfluxDB bucket
    #[arg(long, env = "INFLUX_BUCKET")]
    pub influx_bucket: Option<String>,

    /// Also write the single combined record per coin of older dashboards
    #[arg(long)]
    pub legacy_records: bool,

    /// Print the records to stdout instead of writing them to InfluxDB
    #[arg(long)]
    pub dry_run: bool,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// More logging (-v debug, -vv trace); RUST_LOG wins when set
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn to_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            coinmarketcap_token: self.coinmarketcap_token.clone(),
            influx_url: self.influx_url.clone(),
            influx_token: self.influx_token.clone(),
            influx_org: self.influx_org.clone(),
            influx_bucket: self.influx_bucket.clone(),
            coins: self.coins.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_coins() {
        let args = Args::try_parse_from([
            "crypto2influx",
            "-c",
            "bitcoin:20000:0.5",
            "--coin",
            "ethereum:1500:2",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(args.coins.len(), 2);
        assert_eq!(args.coins[0].slug, "bitcoin");
        assert_eq!(args.coins[0].position.buy_price, 20000.0);
        assert_eq!(args.coins[1].position.amount, 2.0);
        assert!(args.dry_run);
        assert!(!args.legacy_records);
    }

    #[test]
    fn test_invalid_coin_is_rejected() {
        let err = Args::try_parse_from(["crypto2influx", "-c", "bitcoin:20000"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_verbosity_and_log_format() {
        let args =
            Args::try_parse_from(["crypto2influx", "-vv", "--log-format", "json"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.log_format, LogFormat::Json);
    }

    #[test]
    fn test_to_overrides() {
        let args = Args::try_parse_from([
            "crypto2influx",
            "--coinmarketcap-token",
            "cmc",
            "--influx-url",
            "http://localhost:8086",
            "--influx-token",
            "t",
            "--influx-org",
            "o",
            "--influx-bucket",
            "b",
            "-c",
            "bitcoin:1:2",
        ])
        .unwrap();

        let overrides = args.to_overrides();
        assert_eq!(overrides.coinmarketcap_token.as_deref(), Some("cmc"));
        assert_eq!(overrides.influx_url.as_deref(), Some("http://localhost:8086"));
        assert_eq!(overrides.influx_token.as_deref(), Some("t"));
        assert_eq!(overrides.influx_org.as_deref(), Some("o"));
        assert_eq!(overrides.influx_bucket.as_deref(), Some("b"));
        assert_eq!(overrides.coins, args.coins);
    }
}
