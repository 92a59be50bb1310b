//! Live quotes over HTTP from the chart endpoint.
use alert_common::{AlertError, MonitorConfig, Quote, QuoteSource, Result, Ticker};
use log::debug;
use reqwest::Url;
use reqwest::blocking::Client;

use crate::model::chart::ChartEnvelope;

/// Quote source backed by the chart endpoint (`<quote_url>/<TICKER>?range=1d&interval=1d`).
pub struct ChartQuoteSource {
    http: Client,
    base_url: String,
}

impl ChartQuoteSource {
    /// Source reading `config.quote_url()` through `http`.
    pub fn new(http: Client, config: &MonitorConfig) -> Self {
        Self {
            http,
            base_url: config.quote_url().to_string(),
        }
    }

    fn chart_url(&self, ticker: &Ticker) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AlertError::Config(format!("invalid quote_url {}: {}", self.base_url, e)))?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                AlertError::Config(format!("quote_url cannot take a path: {}", self.base_url))
            })?;
            segments.pop_if_empty().push(&ticker.symbol());
        }
        url.query_pairs_mut()
            .append_pair("range", "1d")
            .append_pair("interval", "1d");
        Ok(url)
    }
}

impl QuoteSource for ChartQuoteSource {
    fn fetch(&self, ticker: &Ticker) -> Result<Quote> {
        let url = self.chart_url(ticker)?;
        debug!("Fetching quote for {} from {}", ticker, url);

        let response = self.http.get(url).send().map_err(|e| {
            AlertError::QuoteFetch(format!("quote request for {} failed: {}", ticker, e))
        })?;
        let status = response.status();
        let body = response.text().map_err(|e| {
            AlertError::QuoteFetch(format!("reading quote for {} failed: {}", ticker, e))
        })?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ChartEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.chart.error)
                .map(|error| error.to_string())
                .unwrap_or_else(|| String::from("no detail"));
            return Err(AlertError::QuoteFetch(format!(
                "quote request for {} returned {} ({})",
                ticker, status, detail
            )));
        }

        let envelope: ChartEnvelope = serde_json::from_str(&body).map_err(|e| {
            AlertError::QuoteFetch(format!("malformed quote response for {}: {}", ticker, e))
        })?;
        envelope.into_quote()
    }
}
