//!
//! Common types shared by the stock alert monitor and its collaborators.
//!
//! This crate aggregates:
//! - `error` — unified error type `AlertError` used across the workspace.
//! - `result` — handy `Result<T, AlertError>` alias.
//! - `ticker` — validated ticker symbol.
//! - `threshold` — signed variation threshold and its breach rule.
//! - `quote` — open/current price pair and the `QuoteSource` seam.
//! - `notification` — push payload and the `Notifier` seam.
//! - `policy` — what to do when a single iteration fails.
//! - `config` — `MonitorConfig`, its defaults and the mergeable `PartialConfig`.
//! - `net` — default endpoints and timeouts.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod net;
pub mod notification;
pub mod policy;
pub mod quote;
pub mod result;
pub mod threshold;
pub mod ticker;

pub use config::{MonitorConfig, PartialConfig};
pub use error::AlertError;
pub use notification::{Notifier, Push};
pub use policy::ErrorPolicy;
pub use quote::{Quote, QuoteSource};
pub use result::Result;
pub use threshold::{Direction, Threshold};
pub use ticker::Ticker;
