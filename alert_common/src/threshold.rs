//! Signed variation threshold.
//!
//! A positive threshold watches for an upward breakout above the open price, a
//! negative one for a downward breakout. Zero is accepted but never fires.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use strum_macros::Display;

use crate::error::AlertError;

/// Which side of the open price a threshold watches.
#[derive(Debug, Clone, Copy, Display, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Alert when the variation rises above the threshold.
    Rising,
    /// Alert when the variation falls below the threshold.
    Falling,
    /// Zero threshold; never alerts.
    Disabled,
}

/// Signed fraction of the open price, e.g. `-0.01` for "1% below open".
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "f64")]
pub struct Threshold(f64);

impl Threshold {
    /// Builds a threshold; rejects NaN and infinities.
    pub fn new(fraction: f64) -> Result<Self, AlertError> {
        if !fraction.is_finite() {
            return Err(AlertError::Config(format!(
                "percentage threshold must be a finite number, got {}",
                fraction
            )));
        }
        Ok(Threshold(fraction))
    }

    /// Raw signed fraction.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Side of the open price this threshold watches.
    pub fn direction(&self) -> Direction {
        if self.0 > 0.0 {
            Direction::Rising
        } else if self.0 < 0.0 {
            Direction::Falling
        } else {
            Direction::Disabled
        }
    }

    /// Whether `variation` crosses the threshold. Equality never fires.
    pub fn is_breached_by(&self, variation: f64) -> bool {
        match self.direction() {
            Direction::Rising => variation > self.0,
            Direction::Falling => variation < self.0,
            Direction::Disabled => false,
        }
    }
}

impl TryFrom<f64> for Threshold {
    type Error = AlertError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Threshold::new(value)
    }
}

impl FromStr for Threshold {
    type Err = AlertError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let fraction: f64 = raw.trim().parse().map_err(|e| {
            AlertError::Config(format!("invalid percentage threshold {:?}: {}", raw, e))
        })?;
        Threshold::new(fraction)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}
