//! Default endpoints and HTTP settings shared by the notifier and quote source.

/// Push endpoint used when no `api_url` is configured.
pub const DEFAULT_API_URL: &str = "https://api.pushbullet.com/v2/pushes";
/// Chart endpoint used when no `quote_url` is configured. The ticker is appended
/// as the last path segment.
pub const DEFAULT_QUOTE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
/// Per-request timeout for both outbound calls.
pub const HTTP_TIMEOUT_SECS: u64 = 10;
/// User agent sent with every request; some quote providers reject empty agents.
pub const USER_AGENT: &str = concat!("stock_alert/", env!("CARGO_PKG_VERSION"));
