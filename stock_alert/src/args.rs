//! Command-line arguments for the stock alert monitor.
//!
//! This module defines the CLI interface using `clap`. Every monitor setting can also
//! come from a TOML file passed with `--config`; flags given on the command line win
//! over the file. See `main` for end-to-end usage.
use std::path::PathBuf;

use alert_common::config::DEFAULT_MAX_ITERATIONS;
use alert_common::policy::ErrorPolicy;
use alert_common::{PartialConfig, Threshold, Ticker};
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// TOML file with monitor settings (same keys as the long flags, snake_case).
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Stock ticker to watch (e.g. AAPL, ENB.TO).
    #[clap(long)]
    pub ticker: Option<Ticker>,

    /// Signed fraction of the open price; -0.01 alerts 1% below open, 0.02 alerts 2% above.
    #[clap(long, allow_negative_numbers = true)]
    pub threshold: Option<Threshold>,

    /// Push service access token.
    #[clap(long, env = "PUSHBULLET_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Seconds to wait between two polls.
    #[clap(long)]
    pub sleep_seconds: Option<u64>,

    /// Stop polling after the first alert (the default).
    #[clap(long, conflicts_with = "notify_every_time")]
    pub notify_once: bool,

    /// Keep polling after an alert instead of stopping at the first one.
    #[clap(long)]
    pub notify_every_time: bool,

    /// Push endpoint.
    #[clap(long)]
    pub api_url: Option<String>,

    /// Quote endpoint; the ticker is appended as the last path segment.
    #[clap(long)]
    pub quote_url: Option<String>,

    /// Maximum number of polling cycles.
    #[clap(long, default_value_t = DEFAULT_MAX_ITERATIONS, value_parser = clap::value_parser!(u32).range(1..))]
    pub loops: u32,

    /// What to do when a quote cannot be fetched or is invalid [default: abort].
    #[clap(long, value_enum)]
    pub on_error: Option<ErrorPolicy>,
}

impl Args {
    /// Settings given on the command line, as an override layer.
    pub fn overrides(&self) -> PartialConfig {
        let notify_only_once = if self.notify_once {
            Some(true)
        } else if self.notify_every_time {
            Some(false)
        } else {
            None
        };
        PartialConfig {
            ticker: self.ticker.clone(),
            percentage_threshold: self.threshold,
            sleep_seconds: self.sleep_seconds,
            notify_only_once,
            access_token: self.access_token.clone(),
            api_url: self.api_url.clone(),
            quote_url: self.quote_url.clone(),
            on_error: self.on_error,
        }
    }
}
