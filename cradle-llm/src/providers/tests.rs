use crate::client::LlmClient;
use crate::provider::{EnvVar, LlmProvider};
use crate::providers::ollama::OllamaProvider;
use crate::providers::openai::OpenAIProvider;
use crate::providers::openai_compatible::OpenAICompatibleProvider;

#[test]
fn provider_infos_are_consistent() {
    for info in LlmClient::list_providers() {
        assert!(!info.name.is_empty());
        assert!(!info.display_name.is_empty());
        assert!(!info.env_vars.is_empty(), "{} should document its env vars", info.name);
    }
}

#[test]
fn openai_requires_an_api_key() {
    let info = OpenAIProvider::info();
    assert_eq!(info.name, "openai");
    assert!(info.env_vars.iter().any(|v| v.name == "OPENAI_API_KEY" && v.required));
}

#[test]
fn compatible_requires_key_and_base_url() {
    let info = OpenAICompatibleProvider::info();
    let required: Vec<&str> = info.env_vars.iter()
        .filter(|v| v.required)
        .map(|v| v.name.as_str())
        .collect();
    assert_eq!(required, vec!["OPENAI_COMPATIBLE_API_KEY", "OPENAI_COMPATIBLE_BASE_URL"]);
}

#[test]
fn ollama_needs_no_key() {
    let info = OllamaProvider::info();
    assert!(info.env_vars.iter().all(|v| !v.required));

    let provider = OllamaProvider::new(None);
    assert_eq!(provider.name(), "ollama");
}

#[test]
fn client_reports_the_wrapped_provider() {
    let client = LlmClient::ollama("http://127.0.0.1:11434/v1".to_string());
    assert_eq!(client.provider_name(), "ollama");

    let client = LlmClient::compatible("key".to_string(), "http://localhost:8000/v1".to_string());
    assert_eq!(client.provider_name(), "openai_compatible");
}

#[test]
fn env_var_constructors() {
    let var = EnvVar::required("A_KEY", "a key");
    assert!(var.required);
    let var = EnvVar::optional("A_URL", "a url");
    assert!(!var.required);
}
