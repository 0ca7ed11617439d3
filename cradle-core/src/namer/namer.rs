use cradle_llm::LlmClient;
use thiserror::Error;
use tracing::debug;

use crate::request::{NamingRequest, ValidationError};

use super::extract::{extract_suggestions, NameSuggestion, ParseError};
use super::prompt::{namer_system_prompt, naming_prompt};

/// Sampling temperature kept low for stable phrasing across runs.
const NAMER_TEMPERATURE: f32 = 0.4;

#[derive(Error, Debug)]
pub enum NamerError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("naming service error: {0}")]
    Service(String),
    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Run one naming request end to end: validate, build the prompt, ask the
/// model for a completion, extract the suggestion array. No retry, no
/// caching; a failed request leaves no state behind.
pub async fn namer(
    llm: LlmClient,
    model: String,
    request: NamingRequest,
) -> Result<Vec<NameSuggestion>, NamerError> {
    request.validate()?;

    let prompt = naming_prompt(&request);
    debug!(target: "namer::request", provider = %llm.provider_name(), model = %model, surname = %request.surname);

    let raw = llm
        .complete(&model, &namer_system_prompt(), &prompt, NAMER_TEMPERATURE)
        .await
        .map_err(|e| NamerError::Service(e.to_string()))?;
    debug!(target: "namer::response", raw = %raw);

    Ok(extract_suggestions(&raw)?)
}
