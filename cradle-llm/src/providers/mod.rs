pub mod ollama;
pub mod openai;
pub mod openai_compatible;

#[cfg(test)]
mod tests;
