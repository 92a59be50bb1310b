//! Monitor configuration.
//!
//! `MonitorConfig` is built once per run and never mutated afterwards. It can be
//! constructed directly (`MonitorConfig::new` plus `with_*` setters for the optional
//! fields) or assembled from layered sources through `PartialConfig`: a TOML file
//! first, then command-line overrides, then defaults for whatever is still unset.
//!
//! Defaults:
//! - `sleep_seconds` — 60
//! - `notify_only_once` — true
//! - `api_url` — [`DEFAULT_API_URL`]
//! - `quote_url` — [`DEFAULT_QUOTE_URL`]
//! - `on_error` — [`ErrorPolicy::Abort`]
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::AlertError;
use crate::net::{DEFAULT_API_URL, DEFAULT_QUOTE_URL};
use crate::policy::ErrorPolicy;
use crate::threshold::Threshold;
use crate::ticker::Ticker;

/// Seconds between two polls when nothing else is configured.
pub const DEFAULT_SLEEP_SECONDS: u64 = 60;
/// Whether the loop stops after the first alert when nothing else is configured.
pub const DEFAULT_NOTIFY_ONLY_ONCE: bool = true;
/// Polling cycles per run when the caller does not choose.
pub const DEFAULT_MAX_ITERATIONS: u32 = 2;

/// Immutable settings for one monitoring run.
#[derive(Clone, PartialEq)]
pub struct MonitorConfig {
    ticker: Ticker,
    percentage_threshold: Threshold,
    sleep_seconds: u64,
    notify_only_once: bool,
    access_token: String,
    api_url: String,
    quote_url: String,
    error_policy: ErrorPolicy,
}

impl MonitorConfig {
    /// Creates a config with the required fields and documented defaults.
    pub fn new(
        ticker: Ticker,
        percentage_threshold: Threshold,
        access_token: &str,
    ) -> Result<Self, AlertError> {
        if access_token.trim().is_empty() {
            return Err(AlertError::Config("access token must not be empty".to_string()));
        }
        Ok(MonitorConfig {
            ticker,
            percentage_threshold,
            sleep_seconds: DEFAULT_SLEEP_SECONDS,
            notify_only_once: DEFAULT_NOTIFY_ONLY_ONCE,
            access_token: access_token.trim().to_string(),
            api_url: String::from(DEFAULT_API_URL),
            quote_url: String::from(DEFAULT_QUOTE_URL),
            error_policy: ErrorPolicy::default(),
        })
    }

    /// Sets the pause between polls; must be positive.
    pub fn with_sleep_seconds(mut self, sleep_seconds: u64) -> Result<Self, AlertError> {
        if sleep_seconds == 0 {
            return Err(AlertError::Config(
                "sleep_seconds must be greater than zero".to_string(),
            ));
        }
        self.sleep_seconds = sleep_seconds;
        Ok(self)
    }

    /// Sets whether the loop ends after the first alert.
    pub fn with_notify_only_once(mut self, notify_only_once: bool) -> Self {
        self.notify_only_once = notify_only_once;
        self
    }

    /// Sets the push endpoint. The URL is used exactly as given, minus
    /// surrounding whitespace.
    pub fn with_api_url(mut self, api_url: &str) -> Result<Self, AlertError> {
        let trimmed = api_url.trim();
        if trimmed.is_empty() {
            return Err(AlertError::Config("api_url must not be empty".to_string()));
        }
        self.api_url = trimmed.to_string();
        Ok(self)
    }

    /// Sets the quote endpoint. A trailing `/` is dropped since the ticker is
    /// appended as the next path segment.
    pub fn with_quote_url(mut self, quote_url: &str) -> Result<Self, AlertError> {
        let trimmed = quote_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(AlertError::Config("quote_url must not be empty".to_string()));
        }
        self.quote_url = trimmed.to_string();
        Ok(self)
    }

    /// Sets what the poll loop does when a quote cannot be obtained.
    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    /// Symbol being watched.
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Signed alert threshold.
    pub fn percentage_threshold(&self) -> Threshold {
        self.percentage_threshold
    }

    /// Pause between polls.
    pub fn sleep_seconds(&self) -> u64 {
        self.sleep_seconds
    }

    /// Stop after the first alert.
    pub fn notify_only_once(&self) -> bool {
        self.notify_only_once
    }

    /// Bearer token for the push service.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Push endpoint.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Quote endpoint; the ticker is appended as a path segment.
    pub fn quote_url(&self) -> &str {
        &self.quote_url
    }

    /// Iteration-level error policy.
    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }
}

impl fmt::Debug for MonitorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonitorConfig")
            .field("ticker", &self.ticker)
            .field("percentage_threshold", &self.percentage_threshold)
            .field("sleep_seconds", &self.sleep_seconds)
            .field("notify_only_once", &self.notify_only_once)
            .field("access_token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("quote_url", &self.quote_url)
            .field("error_policy", &self.error_policy)
            .finish()
    }
}

/// Config layer where every field is optional.
///
/// Values are validated as they are read (an empty ticker or a NaN threshold
/// fails TOML parsing). Layers are combined with [`PartialConfig::merge`] and
/// turned into a `MonitorConfig` with [`PartialConfig::build`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    /// Ticker symbol.
    pub ticker: Option<Ticker>,
    /// Signed threshold fraction.
    pub percentage_threshold: Option<Threshold>,
    /// Pause between polls, in seconds.
    pub sleep_seconds: Option<u64>,
    /// Stop after the first alert.
    pub notify_only_once: Option<bool>,
    /// Push service bearer token.
    pub access_token: Option<String>,
    /// Push endpoint.
    pub api_url: Option<String>,
    /// Quote endpoint.
    pub quote_url: Option<String>,
    /// Iteration-level error policy (`abort` or `skip`).
    pub on_error: Option<ErrorPolicy>,
}

impl PartialConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, AlertError> {
        Ok(toml::from_str(raw)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, AlertError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    pub fn merge(self, overrides: PartialConfig) -> PartialConfig {
        PartialConfig {
            ticker: overrides.ticker.or(self.ticker),
            percentage_threshold: overrides.percentage_threshold.or(self.percentage_threshold),
            sleep_seconds: overrides.sleep_seconds.or(self.sleep_seconds),
            notify_only_once: overrides.notify_only_once.or(self.notify_only_once),
            access_token: overrides.access_token.or(self.access_token),
            api_url: overrides.api_url.or(self.api_url),
            quote_url: overrides.quote_url.or(self.quote_url),
            on_error: overrides.on_error.or(self.on_error),
        }
    }

    /// Validate required fields and fill defaults.
    pub fn build(self) -> Result<MonitorConfig, AlertError> {
        let ticker = self.ticker.ok_or_else(|| missing("ticker"))?;
        let threshold = self
            .percentage_threshold
            .ok_or_else(|| missing("percentage_threshold"))?;
        let access_token = self.access_token.ok_or_else(|| missing("access_token"))?;

        let mut config = MonitorConfig::new(ticker, threshold, &access_token)?;
        if let Some(sleep_seconds) = self.sleep_seconds {
            config = config.with_sleep_seconds(sleep_seconds)?;
        }
        if let Some(notify_only_once) = self.notify_only_once {
            config = config.with_notify_only_once(notify_only_once);
        }
        if let Some(api_url) = self.api_url {
            config = config.with_api_url(&api_url)?;
        }
        if let Some(quote_url) = self.quote_url {
            config = config.with_quote_url(&quote_url)?;
        }
        if let Some(on_error) = self.on_error {
            config = config.with_error_policy(on_error);
        }
        Ok(config)
    }
}

fn missing(field: &str) -> AlertError {
    AlertError::Config(format!("missing required setting `{}`", field))
}
