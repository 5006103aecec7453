//! Record formatting.
//!
//! - [`formatter`] - One pure function per record kind (coin, quote, investment, legacy)
//! - [`build_records`] - The formatting pass over a provider response

pub mod formatter;
mod record_set;

pub use formatter::{
    format_coin_record, format_investment_record, format_legacy_record, format_quote_record,
};
pub use record_set::{build_records, RecordOptions, RecordSet};
