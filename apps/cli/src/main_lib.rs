use anyhow::Context;
use clap::error::ErrorKind;
use crypto2influx_core::config::Config;
use crypto2influx_core::publisher::{InfluxWriter, StdoutWriter};
use crypto2influx_core::{RecordOptions, RunSummary};
use crypto2influx_market_data::CoinMarketCapProvider;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::args::{Args, LogFormat};

/// Logs go to stderr so a dry run's stdout carries records only.
pub fn init_tracing(format: LogFormat, verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Process exit status for an argument error: 0 for `--help` and
/// `--version`, 1 for everything else, like any other failed run.
pub fn usage_exit_status(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Configuration file (if any) with flags layered on top, validated.
///
/// A dry run writes nothing, so it does not need the InfluxDB settings.
pub fn build_config(args: &Args) -> anyhow::Result<Config> {
    let overrides = args.to_overrides();
    let config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?
            .merge(overrides),
        None => Config::from_overrides(overrides),
    };
    config.validate(!args.dry_run)?;
    Ok(config)
}

pub async fn run(args: &Args) -> anyhow::Result<RunSummary> {
    let config = build_config(args)?;
    let provider = CoinMarketCapProvider::new(config.coinmarketcap.token.clone())?;
    let options = RecordOptions {
        legacy_records: args.legacy_records,
    };

    let summary = if args.dry_run {
        let mut writer = StdoutWriter::new();
        crypto2influx_core::run(&config, &provider, &mut writer, options).await?
    } else {
        let mut writer = InfluxWriter::new(&config.influxcloud);
        tracing::debug!("Writing to {}", writer.write_url());
        crypto2influx_core::run(&config, &provider, &mut writer, options).await?
    };
    Ok(summary)
}
