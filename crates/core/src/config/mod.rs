//! Run configuration.
//!
//! A single [`Config`] describes the provider credential, the InfluxDB
//! coordinates and the tracked coins with their investment lots. It can be
//! built from a JSON file ([`Config::from_file`]), from flags
//! ([`Config::from_overrides`]) or from both ([`Config::merge`]).

pub mod calendar_date;
mod config_errors;
mod config_model;
mod overrides;

pub use config_errors::ConfigError;
pub use config_model::{
    CoinMarketCapConfig, CoinPosition, Config, InfluxConfig, Investment, Position, TrackedCoin,
};
pub use overrides::ConfigOverrides;
