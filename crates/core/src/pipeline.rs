//! One run: fetch quotes, format records, publish.
//!
//! ```text
//! Config ──slugs──> QuotesProvider ──coins──> build_records ──lines──> LineWriter::flush
//! ```
//!
//! The writer is flushed on every path out of [`run`], including a failed
//! fetch, so nothing buffered is left behind.

use crypto2influx_market_data::QuotesProvider;
use tracing::{info, warn};

use crate::config::{Config, ConfigError};
use crate::errors::Result;
use crate::publisher::LineWriter;
use crate::records::{build_records, RecordOptions};

/// What a run produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub coins_fetched: usize,
    pub coin_records: usize,
    pub quote_records: usize,
    pub investment_records: usize,
    pub legacy_records: usize,
    pub lines_written: usize,
    pub missing_slugs: Vec<String>,
}

pub async fn run<P, W>(
    config: &Config,
    provider: &P,
    writer: &mut W,
    options: RecordOptions,
) -> Result<RunSummary>
where
    P: QuotesProvider + ?Sized,
    W: LineWriter + ?Sized,
{
    let slugs = config.slugs();
    if slugs.is_empty() {
        flush_after_failure(writer).await;
        return Err(ConfigError::NoCoins.into());
    }

    info!(
        "Fetching quotes for {} coins from {}",
        slugs.len(),
        provider.id()
    );
    let coins = match provider.fetch_quotes(&slugs).await {
        Ok(coins) => coins,
        Err(e) => {
            flush_after_failure(writer).await;
            return Err(e.into());
        }
    };

    let records = build_records(config, &coins, options);
    for slug in &records.missing_slugs {
        warn!("No data returned for '{}', skipping", slug);
    }

    for line in records.lines {
        writer.write_record(line);
    }
    let lines_written = writer.flush().await?;
    info!("Wrote {} records", lines_written);

    Ok(RunSummary {
        coins_fetched: coins.len(),
        coin_records: records.coin_records,
        quote_records: records.quote_records,
        investment_records: records.investment_records,
        legacy_records: records.legacy_records,
        lines_written,
        missing_slugs: records.missing_slugs,
    })
}

async fn flush_after_failure<W: LineWriter + ?Sized>(writer: &mut W) {
    if let Err(e) = writer.flush().await {
        warn!("Flush after failed run also failed: {}", e);
    }
}
