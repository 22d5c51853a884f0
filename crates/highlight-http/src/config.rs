//! REST client configuration

use std::time::Duration;

use highlight_common::ApiConfig;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("highlight-boards/", env!("CARGO_PKG_VERSION"));

/// Settings for [`RestChannelGateway`](crate::RestChannelGateway)
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// API root without a trailing slash, e.g. `https://discord.com/api/v10`
    pub base_url: String,
    /// Sent verbatim as the `Authorization` header on API calls
    pub token: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl RestConfig {
    /// Create a config for `base_url` with no token
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            timeout: Duration::from_secs(15),
        }
    }

    /// Set the authorization token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl From<&ApiConfig> for RestConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            base_url: api.base_url.trim_end_matches('/').to_string(),
            token: api.token.clone(),
            timeout: Duration::from_secs(api.timeout_secs),
        }
    }
}
