//! Error types shared by the monitor binary and its collaborators.
//!
//! The `AlertError` enum covers the three failure kinds a monitoring run can hit
//! (quote retrieval, quote validation, notification delivery) plus the ambient
//! configuration, I/O and serialization failures, so every crate can propagate a
//! single error type.
use std::io;

use thiserror::Error;

/// Unified error type for a monitoring run.
#[derive(Error, Debug)]
pub enum AlertError {
    /// The quote source was unreachable, answered with a failure, or returned
    /// malformed data / omitted required fields.
    #[error("Quote fetch error: {0}")]
    QuoteFetch(String),

    /// The quote was received but cannot be used for the variation formula
    /// (zero, missing or non-finite open price, non-positive current price).
    #[error("Invalid quote: {0}")]
    InvalidQuote(String),

    /// The push service could not be reached or did not answer with 200.
    #[error("Notification not sent: {0}")]
    Notification(String),

    /// Missing or invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error originating from the standard library (config files, sockets).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while parsing a TOML configuration file.
    #[error("TOML config error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl AlertError {
    /// Returns `true` for errors raised while obtaining or validating a quote.
    pub fn is_quote_error(&self) -> bool {
        matches!(self, AlertError::QuoteFetch(_) | AlertError::InvalidQuote(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_errors_are_classified() {
        assert!(AlertError::QuoteFetch("timeout".into()).is_quote_error());
        assert!(AlertError::InvalidQuote("open is 0".into()).is_quote_error());
        assert!(!AlertError::Notification("status 401".into()).is_quote_error());
        assert!(!AlertError::Config("ticker".into()).is_quote_error());
    }

    #[test]
    fn display_keeps_context() {
        let err = AlertError::Notification("push rejected with status 401".into());
        assert_eq!(
            err.to_string(),
            "Notification not sent: push rejected with status 401"
        );
    }
}
