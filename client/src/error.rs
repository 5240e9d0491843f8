use std::time::Duration;

use sportstalk_protocol::envelope::ERROR_KIND;
use sportstalk_protocol::{ApiError, ProtocolError};
use thiserror::Error;

/// Kind reported for locally throttled commands.
pub const THROTTLED_KIND: &str = "chat.throttled";

/// Code reported for locally throttled commands. Chosen to match the
/// server's own "method not allowed" answer for flooding.
pub const THROTTLED_CODE: u16 = 405;

/// Everything a client or session operation can fail with.
///
/// Every variant projects onto the server's `{kind, message, code, data}`
/// shape through [`Error::to_api_error`], so callers can treat all failures
/// uniformly.
#[derive(Debug, Error)]
pub enum Error {
    /// The server answered with an error envelope.
    #[error(transparent)]
    Remote(#[from] ApiError),

    /// A repeated command was rejected before reaching the network.
    #[error("{message}")]
    Throttled { message: String, code: u16 },

    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response payload did not match the expected model.
    #[error("Failed to decode response data: {0}")]
    Decode(#[from] serde_json::Error),

    /// The response body was not a valid envelope.
    #[error("Invalid response: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The wait is reported in whole seconds, rounded up.
    pub(crate) fn throttled(window: Duration) -> Self {
        let secs = window.as_secs() + u64::from(window.subsec_nanos() > 0);
        let unit = if secs == 1 { "second" } else { "seconds" };
        Self::Throttled {
            message: format!("Please wait {secs} {unit} before repeating the same message"),
            code: THROTTLED_CODE,
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Self::Remote(e) => &e.kind,
            Self::Throttled { .. } => THROTTLED_KIND,
            _ => ERROR_KIND,
        }
    }

    /// Status-like code; `0` when the failure never got a response.
    pub fn code(&self) -> u16 {
        match self {
            Self::Remote(e) => e.code,
            Self::Throttled { code, .. } => *code,
            Self::Transport(e) => e.status().map(|s| s.as_u16()).unwrap_or(0),
            _ => 0,
        }
    }

    pub fn is_throttled(&self) -> bool {
        matches!(self, Self::Throttled { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Remote(e) if e.is_not_found())
    }

    pub fn to_api_error(&self) -> ApiError {
        match self {
            Self::Remote(e) => e.clone(),
            Self::Throttled { message, code } => ApiError::new(THROTTLED_KIND, message.clone(), *code),
            other => ApiError::new(ERROR_KIND, other.to_string(), other.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttled_projection() {
        let err = Error::throttled(Duration::from_secs(20));
        assert!(err.is_throttled());
        assert_eq!(err.code(), 405);
        assert_eq!(err.kind(), THROTTLED_KIND);
        assert!(err.to_string().contains("20 seconds"));

        let api = err.to_api_error();
        assert_eq!(api.code, 405);
        assert_eq!(api.kind, THROTTLED_KIND);
    }

    #[test]
    fn test_throttled_wait_rounds_up() {
        let err = Error::throttled(Duration::from_millis(500));
        assert_eq!(
            err.to_string(),
            "Please wait 1 second before repeating the same message"
        );

        let err = Error::throttled(Duration::from_millis(20_001));
        assert!(err.to_string().contains("21 seconds"));
    }

    #[test]
    fn test_remote_passes_through_unchanged() {
        let remote = ApiError::new("api.result", "Room not found", 404);
        let err = Error::from(remote.clone());

        assert!(err.is_not_found());
        assert_eq!(err.to_api_error(), remote);
        assert_eq!(err.to_string(), remote.to_string());
    }

    #[test]
    fn test_config_has_no_code() {
        let err = Error::Config("app id is empty".into());
        assert_eq!(err.code(), 0);
        assert_eq!(err.kind(), ERROR_KIND);
        assert!(err.to_api_error().message.contains("app id is empty"));
    }
}
