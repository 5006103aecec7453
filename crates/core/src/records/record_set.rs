use std::collections::{BTreeMap, BTreeSet};

use crypto2influx_market_data::Coin;
use tracing::{debug, info};

use super::formatter::{
    format_coin_record, format_investment_record, format_legacy_record, format_quote_record,
};
use crate::config::{Config, Position, TrackedCoin};

/// Switches for the formatting pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordOptions {
    /// Also emit the legacy single-line-per-coin record
    pub legacy_records: bool,
}

/// Lines produced by one formatting pass, with per-kind counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordSet {
    pub lines: Vec<String>,
    pub coin_records: usize,
    pub quote_records: usize,
    pub investment_records: usize,
    pub legacy_records: usize,
    /// Configured slugs the provider returned nothing for
    pub missing_slugs: Vec<String>,
    /// Returned coins without a USD quote
    pub missing_usd_quotes: Vec<String>,
}

/// Format every returned coin against the configuration.
///
/// Coins are visited in ascending provider id. A configured slug that the
/// provider did not return, or a coin without a USD quote, produces no
/// records at all and is reported in the result; neither is an error.
pub fn build_records(
    config: &Config,
    coins: &BTreeMap<u64, Coin>,
    options: RecordOptions,
) -> RecordSet {
    let tracked = config.tracked_by_slug();
    let mut records = RecordSet::default();

    for coin in coins.values() {
        let Some(quote) = coin.usd_quote() else {
            debug!("No USD quote for '{}', skipping coin", coin.slug);
            records.missing_usd_quotes.push(coin.slug.clone());
            continue;
        };
        let tracked_coin = tracked.get(coin.slug.as_str()).copied();

        records.lines.push(format_coin_record(coin));
        records.coin_records += 1;

        if let Some(tracked_coin) = tracked_coin {
            for (investment_id, investment) in &tracked_coin.investments {
                records
                    .lines
                    .push(format_investment_record(coin, investment_id, investment));
                records.investment_records += 1;
            }
        }

        info!(
            "{}: price {} (updated {})",
            coin.name,
            quote.price,
            quote
                .last_updated
                .map(|ts| ts.to_rfc3339())
                .unwrap_or_else(|| "unknown".to_string())
        );
        records.lines.push(format_quote_record(coin, quote));
        records.quote_records += 1;

        if options.legacy_records {
            let holding = legacy_holding(tracked_coin);
            records.lines.push(format_legacy_record(
                coin,
                quote,
                holding.buy_price,
                holding.amount,
            ));
            records.legacy_records += 1;
        }
    }

    let returned: BTreeSet<&str> = coins.values().map(|coin| coin.slug.as_str()).collect();
    records.missing_slugs = tracked
        .keys()
        .filter(|slug| !returned.contains(*slug))
        .map(|slug| slug.to_string())
        .collect();

    records
}

fn legacy_holding(tracked: Option<&TrackedCoin>) -> Position {
    match tracked {
        Some(coin) => coin.position.unwrap_or_else(|| coin.aggregate_position()),
        None => Position::default(),
    }
}
