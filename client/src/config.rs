use std::time::Duration;

use reqwest::Url;

use crate::error::{Error, Result};

pub const DEFAULT_ENDPOINT: &str = "https://api.sportstalk247.com/api/v3";

/// Repeating the same chat command inside this window is rejected locally.
pub const DEFAULT_THROTTLE_WINDOW: Duration = Duration::from_secs(20);

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ENV_ENDPOINT: &str = "SPORTSTALK_ENDPOINT";
const ENV_APP_ID: &str = "SPORTSTALK_APP_ID";
const ENV_API_TOKEN: &str = "SPORTSTALK_API_TOKEN";
const ENV_THROTTLE_SECS: &str = "SPORTSTALK_THROTTLE_SECS";

/// Connection settings for a SportsTalk application.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, without the application id.
    pub endpoint: String,
    pub app_id: String,
    /// Sent as `x-api-token` on every request.
    pub api_token: String,
    pub throttle_window: Duration,
    /// Whole-request timeout applied by the HTTP client.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            app_id: String::new(),
            api_token: String::new(),
            throttle_window: DEFAULT_THROTTLE_WINDOW,
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("sportstalk-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(app_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            api_token: api_token.into(),
            ..Default::default()
        }
    }

    /// Read settings from `SPORTSTALK_*` environment variables.
    ///
    /// `SPORTSTALK_APP_ID` and `SPORTSTALK_API_TOKEN` are required; the
    /// endpoint and throttle window fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let app_id = lookup(ENV_APP_ID)
            .ok_or_else(|| Error::Config(format!("{ENV_APP_ID} is not set")))?;
        let api_token = lookup(ENV_API_TOKEN)
            .ok_or_else(|| Error::Config(format!("{ENV_API_TOKEN} is not set")))?;

        let mut config = Self::new(app_id, api_token);

        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            config.endpoint = endpoint;
        }

        if let Some(secs) = lookup(ENV_THROTTLE_SECS) {
            let secs = secs.trim().parse::<u64>().map_err(|_| {
                Error::Config(format!("{ENV_THROTTLE_SECS} must be a whole number of seconds"))
            })?;
            config.throttle_window = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_throttle_window(mut self, window: Duration) -> Self {
        self.throttle_window = window;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.app_id.trim().is_empty() {
            return Err(Error::Config("app id is empty".to_string()));
        }

        let url = Url::parse(&self.endpoint)
            .map_err(|e| Error::Config(format!("invalid endpoint {}: {e}", self.endpoint)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "endpoint must be http or https, got {}",
                url.scheme()
            )));
        }

        Ok(())
    }

    /// Endpoint with the application id appended as the last path segment.
    pub fn base_url(&self) -> Result<Url> {
        self.validate()?;

        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| Error::Config(format!("invalid endpoint {}: {e}", self.endpoint)))?;

        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("endpoint cannot be a base: {}", self.endpoint)))?
            .pop_if_empty()
            .push(&self.app_id)
            .push("");

        Ok(url)
    }
}
