//! Push delivery over HTTP.
//!
//! `PushNotifier` posts a JSON `note` to the configured endpoint with a bearer token.
//! Anything other than `200 OK` is reported as `AlertError::Notification`; there is
//! no retry.
use alert_common::{AlertError, MonitorConfig, Notifier, Push, Result};
use log::debug;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use reqwest::blocking::Client;

/// Push service client.
pub struct PushNotifier {
    http: Client,
    api_url: String,
    access_token: String,
}

impl PushNotifier {
    /// Notifier posting to `config.api_url()` with `config.access_token()`.
    pub fn new(http: Client, config: &MonitorConfig) -> Self {
        Self {
            http,
            api_url: config.api_url().to_string(),
            access_token: config.access_token().to_string(),
        }
    }
}

impl Notifier for PushNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<()> {
        let push = Push::note(title, body);
        debug!("Sending push {:?} to {}", push, self.api_url);
        let payload = push.to_json_bytes()?;

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.access_token)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .map_err(|e| {
                AlertError::Notification(format!("request to {} failed: {}", self.api_url, e))
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AlertError::Notification(format!(
                "push rejected with status {}",
                status
            )));
        }
        Ok(())
    }
}
