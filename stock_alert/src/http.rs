//! Blocking HTTP client shared by the notifier and the quote source.
use std::time::Duration;

use alert_common::net::{HTTP_TIMEOUT_SECS, USER_AGENT};
use alert_common::{AlertError, Result};
use reqwest::blocking::Client;

/// Build the client used for every outbound call of a run.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| AlertError::Config(format!("failed to build HTTP client: {}", e)))
}
