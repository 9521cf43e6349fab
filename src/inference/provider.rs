use std::fmt;

use async_trait::async_trait;

use crate::core::conversation::Message;

/// Errors that can occur while asking the gateway for a reply.
/// Callers show one notice for all of them; the variants exist for logging.
#[derive(Debug)]
pub enum ProviderError {
    /// Gateway misconfigured (missing API key, bad URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned a non-success status.
    Api { status: u16, message: String },
    /// Response body was not the expected shape.
    Parse(String),
    /// The request task ended before producing an outcome.
    Interrupted,
}

impl ProviderError {
    /// True for failures the user can fix by checking their API key.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            ProviderError::Config(_) | ProviderError::Api { status: 401 | 403, .. }
        )
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(msg) => write!(f, "config error: {msg}"),
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
            ProviderError::Interrupted => write!(f, "request interrupted"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Everything the gateway needs for one reply.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    /// Conversation as it stood before `prompt` was submitted.
    pub history: &'a [Message],
    pub prompt: &'a str,
}

#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Returns the name of the gateway.
    fn name(&self) -> &str;

    /// Produces the assistant's reply for `request.prompt`.
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_classification() {
        assert!(ProviderError::Config("missing key".into()).is_auth());
        assert!(
            ProviderError::Api {
                status: 401,
                message: String::new()
            }
            .is_auth()
        );
        assert!(
            ProviderError::Api {
                status: 403,
                message: String::new()
            }
            .is_auth()
        );
        assert!(
            !ProviderError::Api {
                status: 500,
                message: String::new()
            }
            .is_auth()
        );
        assert!(!ProviderError::Network("timeout".into()).is_auth());
        assert!(!ProviderError::Parse("bad json".into()).is_auth());
        assert!(!ProviderError::Interrupted.is_auth());
    }

    #[test]
    fn test_display() {
        let err = ProviderError::Api {
            status: 429,
            message: "slow down".into(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 429): slow down");
        assert_eq!(ProviderError::Interrupted.to_string(), "request interrupted");
    }
}
