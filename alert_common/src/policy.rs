//! What the poll loop does when one iteration cannot obtain a usable quote.

use clap::ValueEnum;
use serde::Deserialize;
use strum_macros::Display;

/// Iteration-level error policy.
///
/// Only quote errors are affected; a failed notification always ends the run.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Deserialize,
    ValueEnum,
    Display,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ErrorPolicy {
    /// Propagate the error and end the run.
    #[default]
    Abort,
    /// Log the error, count the iteration as skipped and keep polling.
    Skip,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lowercase_names() {
        #[derive(Deserialize)]
        struct Layer {
            on_error: ErrorPolicy,
        }
        let layer: Layer = toml::from_str("on_error = \"skip\"").unwrap();
        assert_eq!(layer.on_error, ErrorPolicy::Skip);
        assert_eq!(ErrorPolicy::Abort.to_string(), "abort");
        assert_eq!(ErrorPolicy::default(), ErrorPolicy::Abort);
    }
}
