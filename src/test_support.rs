//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::conversation::Message;
use crate::inference::{CompletionGateway, CompletionRequest, ProviderError};

/// A no-op gateway for tests that don't need real API calls. Replies with "".
pub struct NoopProvider;

#[async_trait]
impl CompletionGateway for NoopProvider {
    fn name(&self) -> &str {
        "noop"
    }

    async fn complete(&self, _request: CompletionRequest<'_>) -> Result<String, ProviderError> {
        Ok(String::new())
    }
}

/// A gateway that answers every request with a fixed reply (or a network
/// failure when `reply` is `None`) and remembers what it was asked.
pub struct ScriptedProvider {
    reply: Option<String>,
    pub seen: Mutex<Vec<(Vec<Message>, String)>>,
}

impl ScriptedProvider {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl CompletionGateway for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, ProviderError> {
        self.seen
            .lock()
            .unwrap()
            .push((request.history.to_vec(), request.prompt.to_string()));
        self.reply
            .clone()
            .ok_or_else(|| ProviderError::Network("connection refused".to_string()))
    }
}

/// Creates a test App with a NoopProvider.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopProvider), "test-model".to_string())
}

/// Creates a test App backed by the given gateway.
pub fn test_app_with(gateway: Arc<dyn CompletionGateway>) -> crate::core::state::App {
    crate::core::state::App::new(gateway, "test-model".to_string())
}
