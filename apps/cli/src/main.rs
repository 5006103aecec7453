mod args;
mod main_lib;

use std::process::ExitCode;

use args::Args;
use clap::Parser;
use main_lib::{init_tracing, run, usage_exit_status};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env first so clap's env defaults see it.
    let _ = dotenvy::dotenv();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(usage_exit_status(&e));
        }
    };
    init_tracing(args.log_format, args.verbose);

    match run(&args).await {
        Ok(summary) => {
            tracing::info!(
                "Done: {} coins, {} quote, {} investment and {} legacy records",
                summary.coin_records,
                summary.quote_records,
                summary.investment_records,
                summary.legacy_records
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
