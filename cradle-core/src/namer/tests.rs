use cradle_llm::LlmClient;

use super::extract::{extract_suggestions, NameSuggestion, ParseError};
use super::namer::namer;
use super::prompt::{namer_system_prompt, naming_prompt};
use crate::request::{Gender, Length, NamingRequest, Style, ValidationError};

fn request(surname: &str, syllable: Option<&str>) -> NamingRequest {
    NamingRequest::new(
        surname.to_string(),
        Gender::Female,
        Style::Popular,
        Length::TwoSyllables,
        syllable.map(str::to_string),
    )
}

#[test]
fn prompt_is_deterministic() {
    let request = request("Kim", Some("Li"));
    assert_eq!(naming_prompt(&request), naming_prompt(&request));
    assert_eq!(namer_system_prompt(), namer_system_prompt());
}

#[test]
fn prompt_maps_preferences_to_phrases() {
    let request = NamingRequest::new(
        "Park".to_string(),
        Gender::Male,
        Style::Unique,
        Length::OneSyllable,
        None,
    );
    let prompt = naming_prompt(&request);

    assert!(prompt.contains("5 boy baby names"));
    assert!(prompt.contains("'Park'"));
    assert!(prompt.contains("unique and memorable"));
    assert!(prompt.contains("one syllable"));
    assert!(prompt.contains("\"Name\""));
    assert!(prompt.contains("\"Meaning\""));
    assert!(prompt.contains("\"Characteristics\""));
    assert!(prompt.contains("JSON array"));
}

#[test]
fn no_preference_maps_to_one_or_two_syllables() {
    let request = NamingRequest::new(
        "Kim".to_string(),
        Gender::Female,
        Style::Popular,
        Length::NoPreference,
        None,
    );
    assert!(naming_prompt(&request).contains("one or two syllables"));
}

#[test]
fn prompt_without_syllable_has_no_inclusion_clause() {
    let prompt = naming_prompt(&request("Kim", None));
    assert!(!prompt.contains("include the syllable"));
}

#[test]
fn prompt_with_syllable_contains_literal_clause() {
    let prompt = naming_prompt(&request("Kim", Some("Li")));
    assert!(prompt.contains("include the syllable 'Li'"));
    assert!(prompt.contains("best match with the last name 'Kim'"));
}

#[test]
fn blank_syllable_is_treated_as_absent() {
    let request = request("Kim", Some("   "));
    assert_eq!(request.repeated_syllable, None);
    assert!(!naming_prompt(&request).contains("include the syllable"));
}

#[test]
fn system_prompt_never_varies_with_input() {
    let fixed = namer_system_prompt();
    assert!(fixed.contains("baby names"));
    assert!(!fixed.contains("Kim"));
}

#[test]
fn extract_tolerates_surrounding_prose() {
    let raw = "Sure! Here you go: [{\"Name\":\"Mia\",\"Meaning\":\"beloved\",\"Characteristics\":\"soft, modern\"}] Hope that helps!";
    let suggestions = extract_suggestions(raw).unwrap();
    assert_eq!(
        suggestions,
        vec![NameSuggestion {
            name: "Mia".to_string(),
            meaning: "beloved".to_string(),
            characteristics: "soft, modern".to_string(),
        }]
    );
}

#[test]
fn extract_tolerates_markdown_fences() {
    let raw = "```json\n[{\"Name\":\"Ava\",\"Meaning\":\"life\",\"Characteristics\":\"short, classic\"}]\n```";
    let suggestions = extract_suggestions(raw).unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].name, "Ava");
}

#[test]
fn extract_fails_without_an_array() {
    assert_eq!(
        extract_suggestions("no array here"),
        Err(ParseError::NoJsonArrayFound)
    );
}

#[test]
fn extract_fails_when_brackets_are_reversed() {
    assert_eq!(
        extract_suggestions("] nothing [").unwrap_err(),
        ParseError::NoJsonArrayFound
    );
}

#[test]
fn extract_reports_malformed_json() {
    let err = extract_suggestions("[{\"Name\": \"Ava\",]").unwrap_err();
    assert!(matches!(err, ParseError::MalformedJson(_)));
}

#[test]
fn missing_keys_default_to_empty_strings() {
    let suggestions = extract_suggestions("[{\"Name\":\"Eli\"}]").unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].name, "Eli");
    assert_eq!(suggestions[0].meaning, "");
    assert_eq!(suggestions[0].characteristics, "");
}

#[test]
fn non_string_values_are_stringified() {
    let suggestions = extract_suggestions("[{\"Name\": 5, \"Meaning\": true}]").unwrap();
    assert_eq!(suggestions[0].name, "5");
    assert_eq!(suggestions[0].meaning, "true");
}

#[test]
fn empty_array_yields_no_suggestions() {
    assert_eq!(extract_suggestions("[]").unwrap(), vec![]);
}

#[test]
fn surname_with_latin_letters_passes_validation() {
    assert!(request("García", None).validate().is_ok());
}

#[test]
fn surname_without_latin_letters_is_rejected() {
    assert_eq!(
        request("李", None).validate(),
        Err(ValidationError::NonLatinSurname)
    );
}

#[test]
fn empty_surname_is_rejected_distinctly() {
    assert_eq!(request("", None).validate(), Err(ValidationError::EmptySurname));
    assert_eq!(request("   ", None).validate(), Err(ValidationError::EmptySurname));
}

#[tokio::test]
#[ignore = "requires a configured LLM provider"]
async fn live_naming_round_trip() {
    let llm = LlmClient::first_from_env().expect("no provider configured");
    let model = llm.default_model().await.expect("no model available");

    let suggestions = namer(llm, model, request("Kim", None))
        .await
        .expect("naming request failed");

    assert!(!suggestions.is_empty(), "expected at least one suggestion");
    for suggestion in &suggestions {
        println!("{}: {} / {}", suggestion.name, suggestion.meaning, suggestion.characteristics);
    }
}
