use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// One structured name recommendation as rendered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSuggestion {
    pub name: String,
    pub meaning: String,
    pub characteristics: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no JSON array found in the model output")]
    NoJsonArrayFound,
    #[error("malformed JSON in the model output: {0}")]
    MalformedJson(String),
}

/// Recover the suggestion array from free-form model output. The model is
/// asked for a bare JSON array but sometimes wraps it in prose or markdown
/// fences, so the parse spans the first '[' through the last ']'.
///
/// The result is either a fully populated list (possibly with empty string
/// fields) or an error, never a partial list.
pub fn extract_suggestions(raw: &str) -> Result<Vec<NameSuggestion>, ParseError> {
    let start = raw.find('[').ok_or(ParseError::NoJsonArrayFound)?;
    let end = raw.rfind(']').ok_or(ParseError::NoJsonArrayFound)?;
    if end < start {
        return Err(ParseError::NoJsonArrayFound);
    }

    let value: Value = serde_json::from_str(&raw[start..=end])
        .map_err(|e| ParseError::MalformedJson(e.to_string()))?;
    let items = value.as_array().ok_or(ParseError::NoJsonArrayFound)?;

    Ok(items
        .iter()
        .map(|item| NameSuggestion {
            name: field(item, "Name"),
            meaning: field(item, "Meaning"),
            characteristics: field(item, "Characteristics"),
        })
        .collect())
}

// Missing keys become empty strings, non-string values keep their JSON
// rendering. Extraction never fails past the parse.
fn field(item: &Value, key: &str) -> String {
    match item.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
