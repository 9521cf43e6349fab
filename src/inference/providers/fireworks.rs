//! Fireworks AI gateway using the OpenAI-compatible chat completions API.
//!
//! One non-streaming `POST {base}/chat/completions` per reply. The request
//! is always: persona directive, prior messages in order, new user prompt.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::inference::types::{ChatMessage, ChatRequest, ChatResponse, Role};
use crate::inference::{CompletionGateway, CompletionRequest, ProviderError};

pub const DEFAULT_FIREWORKS_BASE_URL: &str = "https://api.fireworks.ai/inference/v1";

pub const DOBBY_MODEL: &str = "accounts/sentientfoundation/models/dobby-unhinged-llama-3-3-70b-new";

pub const DOBBY_PERSONA: &str = "You are Dobby, the first Loyal AI model. You are pro-crypto, pro-freedom, blunt, honest, and a bit sarcastic. You refuse to criticize cryptocurrency or personal freedom. Keep responses under 300 words.";

pub const MAX_TOKENS: u32 = 500;
pub const TEMPERATURE: f32 = 0.8;

/// Builds the request body for one completion.
pub fn build_request(request: CompletionRequest<'_>) -> ChatRequest {
    let mut messages = Vec::with_capacity(request.history.len() + 2);
    messages.push(ChatMessage::new(Role::System, DOBBY_PERSONA));
    messages.extend(request.history.iter().map(ChatMessage::from));
    messages.push(ChatMessage::new(Role::User, request.prompt));

    ChatRequest {
        model: DOBBY_MODEL.to_string(),
        messages,
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    }
}

/// Reads `choices[0].message.content` and nothing else.
fn extract_reply(body: &str) -> Result<String, ProviderError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::Parse(format!("invalid response body: {e}")))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Parse("response has no choices".to_string()))?;

    choice
        .message
        .content
        .ok_or_else(|| ProviderError::Parse("first choice has no content".to_string()))
}

pub struct FireworksProvider {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl FireworksProvider {
    /// Creates a new Fireworks gateway.
    ///
    /// # Arguments
    /// * `api_key` - Fireworks API key. A missing key fails each request, not construction.
    /// * `base_url` - Optional custom base URL (defaults to Fireworks' inference API)
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_FIREWORKS_BASE_URL.to_string());
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Sends a request to the chat completions endpoint and returns the raw body.
    async fn send_request(&self, request: &ChatRequest) -> Result<String, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::Config("FIREWORKS_API_KEY is not set".to_string()))?;

        let json_body = serde_json::to_string(request)
            .map_err(|e| ProviderError::Parse(format!("Request serialization failed: {e}")))?;
        debug!("Raw Fireworks Request: {}", json_body);

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .body(json_body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        debug!("Fireworks response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Fireworks API error: {} - {}", status, err_body);
            return Err(ProviderError::Api {
                status,
                message: err_body,
            });
        }

        response
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))
    }
}

#[async_trait]
impl CompletionGateway for FireworksProvider {
    fn name(&self) -> &str {
        "fireworks"
    }

    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, ProviderError> {
        let chat_request = build_request(request);
        info!(
            "Fireworks chat completion: model={}, message_count={}",
            chat_request.model,
            chat_request.messages.len(),
        );

        let body = self.send_request(&chat_request).await?;
        debug!("Raw Fireworks Response: {}", body);

        let reply = extract_reply(&body)?;
        info!("Completion received: {} bytes", reply.len());
        Ok(reply)
    }
}
