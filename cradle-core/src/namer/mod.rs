mod extract;
mod namer;
pub mod prompt;

#[cfg(test)]
mod tests;

pub use extract::{extract_suggestions, NameSuggestion, ParseError};
pub use namer::{namer, NamerError};
