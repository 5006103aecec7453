//! Core error types for crypto2influx.
//!
//! Every variant is fatal for the run: the binary logs it and exits with a
//! non-zero status. Per-coin misses are not errors and never reach this type.

use thiserror::Error;

pub use crate::config::ConfigError;
pub use crate::publisher::PublishError;
pub use crypto2influx_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type of a run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Publishing failed: {0}")]
    Publish(#[from] PublishError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::from(ConfigError::NoCoins);
        assert_eq!(format!("{}", error), "Configuration error: No coins configured");

        let error = Error::from(PublishError::Rejected {
            status: 401,
            message: "unauthorized access".to_string(),
        });
        assert_eq!(
            format!("{}", error),
            "Publishing failed: Metrics database rejected write: HTTP 401 - unauthorized access"
        );
    }
}
