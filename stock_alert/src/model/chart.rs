//! Chart endpoint payload.
//!
//! Only the fields needed for a `Quote` are decoded; everything else in the response
//! is ignored. The live price comes from `meta.regularMarketPrice` and the session
//! open from the first non-null entry of `indicators.quote[0].open`.
use std::fmt;

use alert_common::{AlertError, Quote};
use serde::Deserialize;

/// Top-level response object.
#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

/// Error object the provider returns for unknown or delisted symbols.
#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{}: {}", self.code, description),
            None => f.write_str(&self.code),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
    #[serde(default)]
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    #[serde(default)]
    pub regular_market_price: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteSeries>,
}

/// Per-interval OHLC arrays; the provider pads gaps with `null`.
#[derive(Debug, Default, Deserialize)]
pub struct QuoteSeries {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
}

impl ChartEnvelope {
    /// Extract and validate the quote for the first result.
    pub fn into_quote(self) -> Result<Quote, AlertError> {
        if let Some(error) = self.chart.error {
            return Err(AlertError::QuoteFetch(format!("provider error {}", error)));
        }
        let result = self
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| AlertError::QuoteFetch("empty chart result".to_string()))?;

        let price = result.meta.regular_market_price.ok_or_else(|| {
            AlertError::QuoteFetch("response has no regularMarketPrice".to_string())
        })?;
        let open = result
            .indicators
            .quote
            .first()
            .and_then(|series| series.open.iter().find_map(|v| *v))
            .ok_or_else(|| AlertError::InvalidQuote("response has no open price".to_string()))?;

        Quote::new(open, price)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn chart_json(open: &str, price: &str) -> String {
        format!(
            r#"{{"chart":{{"result":[{{"meta":{{"currency":"USD","symbol":"AAPL","regularMarketPrice":{price},"exchangeName":"NMS"}},"timestamp":[1700000000],"indicators":{{"quote":[{{"open":[{open}],"close":[{price}],"volume":[1000]}}]}}}}],"error":null}}}}"#
        )
    }

    fn decode(raw: &str) -> Result<Quote, AlertError> {
        serde_json::from_str::<ChartEnvelope>(raw).unwrap().into_quote()
    }

    #[test]
    fn extracts_open_and_price() {
        let quote = decode(&chart_json("150.0", "148.0")).unwrap();
        assert_eq!(quote.open_price(), 150.0);
        assert_eq!(quote.current_price(), 148.0);
    }

    #[test]
    fn skips_leading_null_open() {
        let quote = decode(&chart_json("null, 99.5", "100.0")).unwrap();
        assert_eq!(quote.open_price(), 99.5);
    }

    #[test]
    fn missing_or_zero_open_is_invalid() {
        assert!(matches!(
            decode(&chart_json("null", "100.0")),
            Err(AlertError::InvalidQuote(_))
        ));
        assert!(matches!(
            decode(&chart_json("0.0", "100.0")),
            Err(AlertError::InvalidQuote(_))
        ));
    }

    #[test]
    fn missing_price_is_a_fetch_error() {
        let raw = r#"{"chart":{"result":[{"meta":{"symbol":"AAPL"},"indicators":{"quote":[{"open":[1.0]}]}}],"error":null}}"#;
        assert!(matches!(decode(raw), Err(AlertError::QuoteFetch(_))));
    }

    #[test]
    fn provider_error_is_a_fetch_error() {
        let raw = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
        match decode(raw) {
            Err(AlertError::QuoteFetch(msg)) => assert!(msg.contains("symbol may be delisted")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn empty_result_is_a_fetch_error() {
        let raw = r#"{"chart":{"result":[],"error":null}}"#;
        assert!(matches!(decode(raw), Err(AlertError::QuoteFetch(_))));
    }
}
