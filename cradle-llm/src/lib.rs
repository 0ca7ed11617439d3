pub mod client;
pub mod provider;
pub mod providers;

pub use client::LlmClient;

// Re-export the openai_dive chat types consumers need to talk to us
pub use openai_dive::v1::resources::chat::{
    ChatCompletionParameters,
    ChatCompletionResponse,
    ChatMessage,
    ChatMessageContent,
};
