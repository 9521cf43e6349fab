pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{CompletionGateway, CompletionRequest, ProviderError};
pub use providers::{
    DEFAULT_FIREWORKS_BASE_URL, DOBBY_MODEL, DOBBY_PERSONA, FireworksProvider, MAX_TOKENS,
    TEMPERATURE,
};
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role};
