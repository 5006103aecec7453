//! Quotes provider abstraction and implementations.
//!
//! This module contains:
//! - The `QuotesProvider` trait that all providers implement
//! - The CoinMarketCap implementation
//!
//! A provider is called exactly once per run. There is no retry, backoff or
//! fallback to another provider; errors go straight back to the caller.

mod traits;

pub mod coinmarketcap;

// Re-exports
pub use traits::QuotesProvider;
