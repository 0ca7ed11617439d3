use super::provider::{LlmProvider, LlmError, ProviderInfo};
use super::providers::{
    ollama::OllamaProvider,
    openai::OpenAIProvider,
    openai_compatible::OpenAICompatibleProvider,
};
use openai_dive::v1::resources::{
    chat::{ChatCompletionParameters, ChatCompletionResponse, ChatMessage, ChatMessageContent},
    model::ListModelResponse,
};

#[derive(Debug)]
pub struct LlmClient {
    provider: Box<dyn LlmProvider>,
}

/// Provider Factory related methods
impl LlmClient {
    /// Create an OpenAI provider from environment variables
    /// Returns None if required environment variables are not set
    pub fn from_env_openai() -> Option<Self> {
        OpenAIProvider::from_env().map(|provider| Self {
            provider: Box::new(provider),
        })
    }

    /// Create an OpenAI Compatible provider from environment variables
    /// Returns None if required environment variables are not set
    pub fn from_env_openai_compatible() -> Option<Self> {
        OpenAICompatibleProvider::from_env().map(|provider| Self {
            provider: Box::new(provider),
        })
    }

    /// Create an Ollama provider from environment variables
    /// Returns None unless OLLAMA_BASE_URL opts in
    pub fn from_env_ollama() -> Option<Self> {
        OllamaProvider::from_env().map(|provider| Self {
            provider: Box::new(provider),
        })
    }

    pub fn openai(api_key: String) -> Self {
        Self {
            provider: Box::new(OpenAIProvider::new(api_key)),
        }
    }

    pub fn compatible(api_key: String, base_url: String) -> Self {
        Self {
            provider: Box::new(OpenAICompatibleProvider::new(api_key, base_url)),
        }
    }

    pub fn ollama(base_url: String) -> Self {
        Self {
            provider: Box::new(OllamaProvider::new(Some(base_url))),
        }
    }

    /// Get the first LLM client available from environment variables,
    /// CRADLE_PROVIDER forces a specific one
    pub fn first_from_env() -> Option<Self> {
        if let Ok(provider) = std::env::var("CRADLE_PROVIDER") {
            match provider.as_str() {
                "openai" => return Self::from_env_openai(),
                "openai_compatible" => return Self::from_env_openai_compatible(),
                "ollama" => return Self::from_env_ollama(),
                _ => {} // Fall through to default behavior
            }
        }

        if let Some(client) = Self::from_env_openai() {
            return Some(client);
        }
        if let Some(client) = Self::from_env_openai_compatible() {
            return Some(client);
        }
        if let Some(client) = Self::from_env_ollama() {
            return Some(client);
        }
        None
    }

    /// Get information about all available providers
    pub fn list_providers() -> Vec<ProviderInfo> {
        vec![
            OpenAIProvider::info(),
            OpenAICompatibleProvider::info(),
            OllamaProvider::info(),
        ]
    }
}

/// Provider Delegate
impl LlmClient {
    pub async fn models(&self) -> Result<ListModelResponse, LlmError> {
        self.provider.models().await
    }

    pub async fn default_model(&self) -> Result<String, LlmError> {
        if let Ok(model) = std::env::var("CRADLE_MODEL") {
            Ok(model)
        } else {
            self.provider.default_model().await
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Get a reference to the underlying provider (for testing)
    pub fn provider(&self) -> &dyn LlmProvider {
        &*self.provider
    }
}

/// Higher level completion client
impl LlmClient {
    pub async fn chat(&self, request: ChatCompletionParameters) -> Result<ChatCompletionResponse, LlmError> {
        self.provider.chat(request).await
    }

    /// One-shot completion: a fixed system instruction plus a single user
    /// message, returning the assistant text of the first choice.
    pub async fn complete(
        &self,
        model: &str,
        system: &str,
        user: &str,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let request = ChatCompletionParameters {
            model: model.to_string(),
            messages: vec![
                ChatMessage::System {
                    content: ChatMessageContent::Text(system.to_string()),
                    name: None,
                },
                ChatMessage::User {
                    content: ChatMessageContent::Text(user.to_string()),
                    name: None,
                },
            ],
            temperature: Some(temperature),
            ..Default::default()
        };

        let response = self.chat(request).await?;
        let choice = response.choices.into_iter().next()
            .ok_or_else(|| -> LlmError { "completion returned no choices".into() })?;

        match choice.message {
            ChatMessage::Assistant { content: Some(ChatMessageContent::Text(text)), .. } => Ok(text),
            _ => Err("completion returned no text content".into()),
        }
    }
}
