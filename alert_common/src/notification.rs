//! Push notification payload and the `Notifier` seam.
use serde::Serialize;

use crate::error::AlertError;

/// Payload kind understood by the push service.
pub const NOTE: &str = "note";

/// JSON body of a push: `{"type": "note", "title": ..., "body": ...}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Push {
    /// Always `note`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Push title (the ticker).
    pub title: String,
    /// Push body (see [`alert_body`]).
    pub body: String,
}

impl Push {
    /// Creates a `note` push.
    pub fn note(title: &str, body: &str) -> Self {
        Push {
            kind: NOTE,
            title: String::from(title),
            body: String::from(body),
        }
    }

    /// Encode the push to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, AlertError> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Body text for an alert at `price`, e.g. `reached 148.00`.
pub fn alert_body(price: f64) -> String {
    format!("reached {:.2}", price)
}

/// Outbound notification sink.
///
/// A single request/response; failures surface as `AlertError::Notification`
/// and are never retried.
pub trait Notifier {
    /// Deliver one push with the given title and body.
    fn notify(&self, title: &str, body: &str) -> Result<(), AlertError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_key() {
        let push = Push::note("AAPL", &alert_body(148.0));
        let value: serde_json::Value =
            serde_json::from_slice(&push.to_json_bytes().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"type": "note", "title": "AAPL", "body": "reached 148.00"})
        );
    }

    #[test]
    fn body_rounds_to_cents() {
        assert_eq!(alert_body(101.005_1), "reached 101.01");
        assert_eq!(alert_body(7.0), "reached 7.00");
    }
}
