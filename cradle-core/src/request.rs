use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please enter a last name")]
    EmptySurname,
    #[error("please enter the last name in English (at least one letter a-z)")]
    NonLatinSurname,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Lexical token used inside the prompt.
    pub fn noun(&self) -> &'static str {
        match self {
            Gender::Male => "boy",
            Gender::Female => "girl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    Popular,
    Unique,
}

impl Style {
    pub fn phrase(&self) -> &'static str {
        match self {
            Style::Popular => "popular",
            Style::Unique => "unique and memorable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Length {
    OneSyllable,
    TwoSyllables,
    NoPreference,
}

impl Length {
    pub fn phrase(&self) -> &'static str {
        match self {
            Length::OneSyllable => "one syllable",
            Length::TwoSyllables => "two syllables",
            Length::NoPreference => "one or two syllables",
        }
    }
}

/// One user query, immutable once constructed. Built fresh per submission,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingRequest {
    pub surname: String,
    pub gender: Gender,
    pub style: Style,
    pub length: Length,
    pub repeated_syllable: Option<String>,
}

impl NamingRequest {
    /// Trims both free-text fields; a repeated syllable that is empty after
    /// trimming is the same as no syllable at all.
    pub fn new(
        surname: String,
        gender: Gender,
        style: Style,
        length: Length,
        repeated_syllable: Option<String>,
    ) -> Self {
        let repeated_syllable = repeated_syllable
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self {
            surname: surname.trim().to_string(),
            gender,
            style,
            length,
            repeated_syllable,
        }
    }

    /// Checked before any network call. Empty surnames and surnames without
    /// any Latin letter get distinct errors.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.surname.is_empty() {
            return Err(ValidationError::EmptySurname);
        }
        if !contains_latin(&self.surname) {
            return Err(ValidationError::NonLatinSurname);
        }
        Ok(())
    }
}

/// True when the text contains at least one character in a-z/A-Z.
pub fn contains_latin(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}
