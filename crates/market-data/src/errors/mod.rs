//! Error types for the market data crate.
//!
//! [`MarketDataError`] covers every way a quotes request can fail. None of
//! them are retried: callers surface the error and stop the run.

use thiserror::Error;

/// Errors that can occur while fetching quotes from a provider.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider rejected the credential (missing, invalid, disabled key,
    /// or a plan that does not cover the endpoint).
    #[error("Unauthorized: {provider} - {message}")]
    Unauthorized {
        /// The provider that rejected the request
        provider: String,
        /// The reason reported by the provider
        message: String,
    },

    /// The provider could not be reached or the transfer was interrupted.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body does not match the expected schema.
    #[error("Decode error: {provider} - {message}")]
    Decode {
        /// The provider whose response could not be decoded
        provider: String,
        /// The decoder's error message
        message: String,
    },

    /// The provider answered with an error status or a non-zero error code.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },
}

impl MarketDataError {
    /// Returns true when the error means the credential was rejected.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    pub(crate) fn decode(provider: &str, err: impl std::fmt::Display) -> Self {
        Self::Decode {
            provider: provider.to_string(),
            message: err.to_string(),
        }
    }
}
