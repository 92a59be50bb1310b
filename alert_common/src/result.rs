//! Result type alias shared across the workspace.
//!
//! Functions return `Result<T>` and default to the common `AlertError`.
use crate::error::AlertError;

/// Workspace-wide `Result` alias with `AlertError` as the default error.
pub type Result<T, E = AlertError> = std::result::Result<T, E>;
