use crate::provider::{LlmProvider, LlmError, ProviderInfo, EnvVar};
use async_trait::async_trait;
use openai_dive::v1::{
    api::Client,
    resources::{
        chat::{ChatCompletionParameters, ChatCompletionResponse},
        model::ListModelResponse,
    },
};

const OLLAMA_BASE_URL: &str = "http://127.0.0.1:11434/v1";

pub struct OllamaProvider {
    client: Client,
}

impl OllamaProvider {
    pub fn new(base_url: Option<String>) -> Self {
        let mut client = Client::new(String::new());
        let url = base_url.unwrap_or_else(|| OLLAMA_BASE_URL.to_string());
        client.set_base_url(&url);
        Self { client }
    }

    /// Create Ollama provider from environment variables
    /// Ollama needs no API key, only an OLLAMA_BASE_URL to opt in
    pub fn from_env() -> Option<Self> {
        std::env::var("OLLAMA_BASE_URL").ok().map(|base_url| {
            Self::new(Some(base_url))
        })
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    async fn models(&self) -> Result<ListModelResponse, LlmError> {
        let response = self.client.models().list().await
            .map_err(|e| Box::new(e) as LlmError)?;
        Ok(response)
    }

    async fn chat(&self, request: ChatCompletionParameters) -> Result<ChatCompletionResponse, LlmError> {
        let response = self.client.chat().create(request).await
            .map_err(|e| Box::new(e) as LlmError)?;
        Ok(response)
    }

    fn name(&self) -> &'static str {
        "ollama"
    }

    fn info() -> ProviderInfo {
        ProviderInfo {
            name: "ollama",
            display_name: "Ollama",
            env_vars: vec![
                EnvVar::optional("OLLAMA_BASE_URL", "ollama base open ai compat url"),
            ],
        }
    }
}
