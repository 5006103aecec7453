//! Pure mapping from provider and configuration data to line-protocol
//! records. Every function builds one line and touches nothing else.

use crypto2influx_market_data::{Coin, Quote};

use crate::config::Investment;
use crate::constants::{COIN_MEASUREMENT, INVESTMENT_MEASUREMENT, QUOTE_MEASUREMENT};
use crate::line_protocol::{escape_tag_value, Point};
use crate::utils::time_utils::{epoch_millis, epoch_nanos};

/// Identity and supply of a coin, stamped with the provider's last update.
pub fn format_coin_record(coin: &Coin) -> String {
    Point::new(COIN_MEASUREMENT)
        .tag("symbol", &coin.symbol)
        .tag("slug", &coin.slug)
        .tag("name", &coin.name)
        .field("is_active", coin.is_active())
        .field("is_fiat", coin.is_fiat())
        .field("circulating_supply", coin.circulating_supply)
        .field("total_supply", coin.total_supply)
        .field("max_supply", coin.max_supply)
        .field("cmc_rank", coin.cmc_rank)
        .timestamp(coin.last_updated.and_then(epoch_nanos))
        .to_line()
}

/// Price and market metrics, stamped with the quote's own last update.
pub fn format_quote_record(coin: &Coin, quote: &Quote) -> String {
    Point::new(QUOTE_MEASUREMENT)
        .tag("symbol", &coin.symbol)
        .tag("slug", &coin.slug)
        .field("price", quote.price)
        .field("volume_24h", quote.volume_24h)
        .field("volume_change_24h", quote.volume_change_24h)
        .field("percent_change_1h", quote.percent_change_1h)
        .field("percent_change_24h", quote.percent_change_24h)
        .field("percent_change_7d", quote.percent_change_7d)
        .field("percent_change_30d", quote.percent_change_30d)
        .field("market_cap", quote.market_cap)
        .field("market_cap_dominance", quote.market_cap_dominance)
        .field("fully_diluted_market_cap", quote.fully_diluted_market_cap)
        .timestamp(quote.last_updated.and_then(epoch_nanos))
        .to_line()
}

/// One investment lot.
///
/// The acquisition date appears twice: as the `date` field in milliseconds
/// and as the record timestamp in nanoseconds. Existing dashboards read the
/// field, so both stay.
pub fn format_investment_record(coin: &Coin, investment_id: &str, investment: &Investment) -> String {
    let acquired_at = investment.acquired_at();
    Point::new(INVESTMENT_MEASUREMENT)
        .tag("symbol", &coin.symbol)
        .tag("slug", &coin.slug)
        .tag("platform", &investment.platform)
        .tag("investment", investment_id)
        .field("buy_price", investment.buy_price)
        .field("amount", investment.amount)
        .field("date", epoch_millis(acquired_at))
        .timestamp(epoch_nanos(acquired_at))
        .to_line()
}

/// The legacy combined record of older dashboards: measurement is the
/// symbol, numbers have six fixed decimals and there is no timestamp.
pub fn format_legacy_record(coin: &Coin, quote: &Quote, buy_price: f64, amount: f64) -> String {
    format!(
        "{},slug={},name={} price={:.6},buy={:.6},amount={:.6}",
        escape_tag_value(&coin.symbol),
        escape_tag_value(&coin.slug),
        escape_tag_value(&coin.name),
        quote.price,
        buy_price,
        amount,
    )
}
