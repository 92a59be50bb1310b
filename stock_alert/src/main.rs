//! Stock Alert — polls a stock quote at a fixed interval and sends a push notification
//! when the live price moves away from the session's open price by more than a
//! configured fraction.
//!
//! Usage example (CLI):
//! ```bash
//! stock_alert --ticker ENB.TO --threshold -0.01 --access-token o.XXXX --loops 360
//! stock_alert --config ./stock_alert.toml --notify-every-time
//! ```
//!
//! A positive threshold watches for the price rising above open, a negative one for
//! it falling below. By default the run stops after the first alert; see `args` for
//! every option and `monitor` for the loop semantics.
#![warn(missing_docs)]
mod args;
mod http;
mod model;
mod monitor;
mod notifier;
mod quote_source;
#[cfg(test)]
mod test_support;

use crate::args::Args;
use crate::monitor::{Monitor, RunSummary, ThreadPause};
use crate::notifier::PushNotifier;
use crate::quote_source::ChartQuoteSource;
use alert_common::threshold::Direction;
use alert_common::{PartialConfig, Result};
use clap::Parser;
use log::{error, info, warn};
use std::process;

fn main() {
    init_logger();
    let args = Args::parse();

    match run(&args) {
        Ok(summary) => {
            info!(
                "Monitor finished: {} polls, {} alerts sent, {} skipped",
                summary.iterations, summary.alerts_sent, summary.skipped
            );
        }
        Err(e) => {
            error!("Monitor stopped: {}", e);
            process::exit(1);
        }
    }
}

/// Builds the config from file and flags, wires the monitor and runs it.
fn run(args: &Args) -> Result<RunSummary> {
    let file_layer = match &args.config {
        Some(path) => PartialConfig::load(path)?,
        None => PartialConfig::default(),
    };
    let config = file_layer.merge(args.overrides()).build()?;
    info!("Monitor config: {:?}", config);

    if config.percentage_threshold().direction() == Direction::Disabled {
        warn!("percentage threshold is 0; no alert will ever be sent");
    }

    let http = http::build_client()?;
    let monitor = Monitor::new(
        config.clone(),
        ChartQuoteSource::new(http.clone(), &config),
        PushNotifier::new(http, &config),
        ThreadPause,
    );

    info!(
        "Watching {} ({} threshold {}) for up to {} polls every {}s, on error: {}",
        config.ticker(),
        config.percentage_threshold().direction(),
        config.percentage_threshold(),
        args.loops,
        config.sleep_seconds(),
        config.error_policy()
    );

    monitor.run(args.loops)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
