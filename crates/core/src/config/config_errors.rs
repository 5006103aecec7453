use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, merging or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Missing configuration value: {0}")]
    MissingValue(&'static str),

    /// A `slug:buyPrice:amount` coin argument could not be parsed.
    #[error("Invalid coin '{spec}': {reason}")]
    InvalidCoinSpec { spec: String, reason: String },

    #[error("No coins configured")]
    NoCoins,
}
