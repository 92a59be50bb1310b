//! Wire types of the quote provider.
//!
//! This module groups the serde types decoded from provider responses:
//! - `chart` — chart endpoint envelope and its conversion into a `Quote`.
pub mod chart;
