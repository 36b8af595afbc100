use std::time::Duration;

use thiserror::Error;

use super::types::{PromptKind, truncate_chars};
use crate::provider::constants::relay::ERROR_MESSAGE_LIMIT;

/// Outcome of a single relay call: the provider's reply text, or why there is none.
pub type CompletionResult = Result<String, RelayError>;

/// Every way a relay call can fail.
///
/// The `Display` output of each variant is the short message handed back to end users,
/// so callers that only need a string can use `to_string()` and callers that need to
/// branch can match on the variant.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Error: API key not configured")]
    ConfigurationMissing,

    #[error("{}", .kind.timeout_message())]
    Timeout { kind: PromptKind, after: Duration },

    /// The provider answered with something other than a usable 200.
    #[error("Error: {status}")]
    Provider { status: u16, body: String },

    #[error("Error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl RelayError {
    /// Wraps a lower-level failure, keeping at most the first 100 characters of its text.
    pub fn transport<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let text = error.to_string();
        Self::Transport {
            message: truncate_chars(&text, ERROR_MESSAGE_LIMIT).to_string(),
            source: Some(Box::new(error)),
        }
    }

    pub fn transport_message(message: impl AsRef<str>) -> Self {
        Self::Transport {
            message: truncate_chars(message.as_ref(), ERROR_MESSAGE_LIMIT).to_string(),
            source: None,
        }
    }

    /// HTTP status reported by the provider, if the failure came from one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RelayError::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_user_facing_strings() {
        assert_eq!(
            RelayError::ConfigurationMissing.to_string(),
            "Error: API key not configured"
        );
        assert_eq!(
            RelayError::Provider {
                status: 429,
                body: "slow down".to_string()
            }
            .to_string(),
            "Error: 429"
        );
        assert_eq!(
            RelayError::Timeout {
                kind: PromptKind::Text,
                after: Duration::from_secs(5)
            }
            .to_string(),
            "Response timeout - please try a shorter question"
        );
        assert_eq!(
            RelayError::Timeout {
                kind: PromptKind::Image,
                after: Duration::from_secs(5)
            }
            .to_string(),
            "Image analysis timeout - please try again"
        );
    }

    #[test]
    fn transport_message_is_truncated() {
        let err = RelayError::transport_message("x".repeat(250));
        match &err {
            RelayError::Transport { message, source } => {
                assert_eq!(message.chars().count(), 100);
                assert!(source.is_none());
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert_eq!(err.to_string().len(), "Error: ".len() + 100);
    }

    #[test]
    fn transport_keeps_source() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = RelayError::transport(parse_err);
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.status_code(), None);
    }
}
