//! Poll loop: fetch a quote, compare its variation against the threshold, and push
//! an alert when the threshold is crossed.
//!
//! One operation is in flight at a time: fetch, compute, optionally notify, then
//! pause. The last iteration never pauses. With `notify_only_once` the loop ends right
//! after the first alert regardless of the remaining iteration budget.
use std::thread;
use std::time::Duration;

use alert_common::notification::alert_body;
use alert_common::{
    AlertError, ErrorPolicy, MonitorConfig, Notifier, QuoteSource, Result, Threshold,
};
use chrono::Local;
use log::{debug, info, warn};

/// Blocking suspension between two polls.
pub trait Pause {
    /// Suspend the caller for `duration`.
    fn pause(&self, duration: Duration);
}

/// `Pause` backed by `thread::sleep`.
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Threshold crossing observed in one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alert {
    /// Live price that crossed the threshold.
    pub price: f64,
    /// Signed fraction relative to the open price.
    pub variation: f64,
    /// Threshold that was crossed.
    pub threshold: Threshold,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Polling cycles started, including skipped ones.
    pub iterations: u32,
    /// Pushes delivered.
    pub alerts_sent: u32,
    /// Cycles abandoned under `ErrorPolicy::Skip`.
    pub skipped: u32,
}

/// Single-ticker price monitor.
pub struct Monitor<S, N, P> {
    config: MonitorConfig,
    source: S,
    notifier: N,
    pause: P,
}

impl<S, N, P> Monitor<S, N, P>
where
    S: QuoteSource,
    N: Notifier,
    P: Pause,
{
    /// Wire a monitor; the error policy is taken from `config`.
    pub fn new(config: MonitorConfig, source: S, notifier: N, pause: P) -> Self {
        Self {
            config,
            source,
            notifier,
            pause,
        }
    }

    /// One fetch/compute/decide cycle. Returns the alert to send, if any.
    pub fn check(&self) -> Result<Option<Alert>> {
        let quote = self.source.fetch(self.config.ticker())?;
        let variation = quote.variation();
        let threshold = self.config.percentage_threshold();

        debug!(
            "{} price={:.2} open={:.2} variation={:.2}%",
            self.config.ticker(),
            quote.current_price(),
            quote.open_price(),
            variation * 100.0
        );

        Ok(threshold.is_breached_by(variation).then_some(Alert {
            price: quote.current_price(),
            variation,
            threshold,
        }))
    }

    /// Runs up to `max_iterations` polling cycles.
    pub fn run(&self, max_iterations: u32) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let interval = Duration::from_secs(self.config.sleep_seconds());

        for iteration in 0..max_iterations {
            summary.iterations += 1;

            match self.check() {
                Ok(Some(alert)) => {
                    self.send(&alert)?;
                    summary.alerts_sent += 1;
                    if self.config.notify_only_once() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e)
                    if e.is_quote_error() && self.config.error_policy() == ErrorPolicy::Skip =>
                {
                    warn!(
                        "Skipping iteration {} for {}: {}",
                        iteration + 1,
                        self.config.ticker(),
                        e
                    );
                    summary.skipped += 1;
                }
                Err(e) => return Err(e),
            }

            if iteration + 1 < max_iterations {
                self.pause.pause(interval);
            }
        }
        Ok(summary)
    }

    fn send(&self, alert: &Alert) -> Result<(), AlertError> {
        let ticker = self.config.ticker();
        self.notifier
            .notify(ticker.as_str(), &alert_body(alert.price))?;
        info!(
            "alert sent for {} at price {:.2} variation:{:.1}% threshold:{} {}",
            ticker,
            alert.price,
            alert.variation * 100.0,
            alert.threshold,
            Local::now().format("at %H:%M:%S of %D")
        );
        Ok(())
    }
}
