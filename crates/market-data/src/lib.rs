//! crypto2influx Market Data Crate
//!
//! This crate fetches the latest cryptocurrency quotes from a quotes
//! provider and decodes them into typed models.
//!
//! # Overview
//!
//! ```text
//! slugs ──> QuotesProvider (CoinMarketCap) ──> BTreeMap<id, Coin>
//!                                                   │
//!                                                   └── quote["USD"] ──> Quote
//! ```
//!
//! # Core Types
//!
//! - [`Coin`] - Identity, supply figures and per-currency quotes of a coin
//! - [`Quote`] - Price and market metrics in one currency
//! - [`Platform`] - Blockchain metadata of tokens, decoded on demand
//! - [`QuotesLatest`] / [`Status`] - Raw endpoint body and status envelope
//! - [`MarketDataError`] - Auth, network, decode and provider failures

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{Coin, Platform, Quote, QuotesLatest, Status, USD};
pub use provider::coinmarketcap::CoinMarketCapProvider;
pub use provider::QuotesProvider;
