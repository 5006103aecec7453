//! Market data models
//!
//! Response types of the quotes provider:
//! - `coin` - A coin with its identity, supply figures and per-currency quotes (Coin)
//! - `quote` - Price and market metrics in one currency (Quote)
//! - `platform` - Lazily decoded blockchain platform metadata (Platform)
//! - `response` - The quotes endpoint body and its status envelope (QuotesLatest, Status)

mod coin;
mod nullable;
mod platform;
mod quote;
mod response;

pub use coin::{Coin, USD};
pub use platform::Platform;
pub use quote::Quote;
pub use response::{QuotesLatest, Status};
