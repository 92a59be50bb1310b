//! Ticker symbol accepted by the monitor.
//!
//! Any exchange symbol is allowed (`AAPL`, `ENB.TO`, `^GSPC`). The value is trimmed
//! and otherwise kept as the user spelled it; that spelling is the push title. The
//! quote source asks for the upper-cased [`Ticker::symbol`].

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::AlertError;

/// Validated ticker symbol.
#[derive(Debug, Clone, Deserialize, Hash, Eq, PartialEq)]
#[serde(try_from = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Symbol as given by the user, used as the push title.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-cased symbol sent to the quote source.
    pub fn symbol(&self) -> String {
        self.0.to_ascii_uppercase()
    }
}

impl FromStr for Ticker {
    type Err = AlertError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AlertError::Config("ticker must not be empty".to_string()));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(AlertError::Config(format!(
                "ticker must not contain whitespace: {:?}",
                trimmed
            )));
        }
        Ok(Ticker(trimmed.to_string()))
    }
}

impl TryFrom<String> for Ticker {
    type Error = AlertError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_spelling_and_trims() {
        let ticker: Ticker = "  enb.to ".parse().unwrap();
        assert_eq!(ticker.as_str(), "enb.to");
        assert_eq!(ticker.to_string(), "enb.to");
        assert_eq!(ticker.symbol(), "ENB.TO");
    }

    #[test]
    fn rejects_empty_and_inner_spaces() {
        assert!(matches!("   ".parse::<Ticker>(), Err(AlertError::Config(_))));
        assert!(matches!("AA PL".parse::<Ticker>(), Err(AlertError::Config(_))));
    }

    #[test]
    fn deserializes_through_validation() {
        let ticker: Ticker = serde_json::from_str("\"aapl\"").unwrap();
        assert_eq!(ticker.as_str(), "aapl");
        assert!(serde_json::from_str::<Ticker>("\"\"").is_err());
    }
}
