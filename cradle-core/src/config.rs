use cradle_llm::provider::LlmError;
use cradle_llm::LlmClient;

/// Environment-driven runtime configuration. The tool keeps no state between
/// sessions, so there is no config file: provider credentials come from the
/// provider env vars and CRADLE_PROVIDER / CRADLE_MODEL pin a choice.
pub struct CradleConfig;

impl CradleConfig {
    /// Resolve the configured client and model. Fails with a message naming
    /// the env vars to set when no provider is reachable from the
    /// environment.
    pub async fn get_llm() -> Result<(LlmClient, String), LlmError> {
        let llm = LlmClient::first_from_env().ok_or_else(|| -> LlmError {
            "no LLM provider configured, set OPENAI_API_KEY, \
             OPENAI_COMPATIBLE_API_KEY + OPENAI_COMPATIBLE_BASE_URL, \
             or OLLAMA_BASE_URL"
                .into()
        })?;
        let model = llm.default_model().await?;
        Ok((llm, model))
    }
}
