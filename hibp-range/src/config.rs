use std::time::Duration;

use tracing::warn;

/// Environment variable overriding the range API base URL.
pub const API_URL_ENV: &str = "HIBP_API_URL";

/// Environment variable overriding the request timeout, in milliseconds. `0` disables it.
pub const TIMEOUT_MS_ENV: &str = "HIBP_TIMEOUT_MS";

/// The public Pwned Passwords range endpoint. The prefix is appended as a path segment.
pub const DEFAULT_API_BASE_URL: &str = "https://api.pwnedpasswords.com/range";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the range endpoint, without the prefix.
    pub base_url: String,
    /// Abort the request once this elapses. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// The API rejects requests without a user agent.
    pub user_agent: String,
    /// Send `Add-Padding: true` so responses are padded with zero-count decoys.
    pub add_padding: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            add_padding: true,
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by [`API_URL_ENV`] and [`TIMEOUT_MS_ENV`] when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
            config.base_url = url;
        }

        if let Some(raw) = lookup(TIMEOUT_MS_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.timeout = timeout_from_millis(ms),
                Err(_) => warn!(value = %raw, "ignoring invalid {TIMEOUT_MS_ENV}"),
            }
        }

        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_padding(mut self, add_padding: bool) -> Self {
        self.add_padding = add_padding;
        self
    }

    /// The request URL for a prefix: base URL + '/' + prefix.
    pub fn range_url(&self, prefix: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), prefix)
    }
}

/// Maps a millisecond count to a timeout, treating zero as "no timeout".
pub fn timeout_from_millis(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}
