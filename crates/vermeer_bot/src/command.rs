//! Command definitions and the handler trait.

use async_trait::async_trait;
use derive_getters::Getters;
use std::collections::HashMap;
use typed_builder::TypedBuilder;
use vermeer_core::CommandInvocation;
use vermeer_error::VermeerResult;

/// Trait for command business logic.
///
/// Handlers receive a matched invocation and produce the reply payload.
/// A [`vermeer_error::CommandError`] signals malformed input; the server
/// reports it back to the requester and keeps running.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Produce the reply for an invocation.
    ///
    /// # Errors
    ///
    /// Returns error if a parameter fails to parse into its expected shape.
    async fn handle(&self, invocation: &CommandInvocation) -> VermeerResult<String>;
}

/// A registered command.
///
/// The usage template is a whitespace-separated word sequence where
/// `<name>` words capture a parameter, e.g. `my yob is <year>`.
#[derive(Debug, Clone, Getters, TypedBuilder)]
pub struct CommandDefinition {
    /// Usage template with `<param>` captures.
    #[builder(setter(into))]
    usage: String,

    /// Human-readable description.
    #[builder(setter(into), default)]
    description: String,

    /// Example invocations.
    #[builder(default)]
    examples: Vec<String>,
}

impl CommandDefinition {
    /// Match raw text against the usage template.
    ///
    /// Returns the captured parameters on a match, `None` otherwise.
    /// Matching is word-wise: literal words must match exactly and every
    /// `<name>` word captures the corresponding input word.
    pub fn match_text(&self, text: &str) -> Option<HashMap<String, String>> {
        let template: Vec<&str> = self.usage.split_whitespace().collect();
        let words: Vec<&str> = text.split_whitespace().collect();

        if template.len() != words.len() {
            return None;
        }

        let mut parameters = HashMap::new();
        for (pattern, word) in template.iter().zip(&words) {
            if let Some(name) = pattern.strip_prefix('<').and_then(|p| p.strip_suffix('>')) {
                parameters.insert(name.to_string(), (*word).to_string());
            } else if pattern != word {
                return None;
            }
        }

        Some(parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yob_command() -> CommandDefinition {
        CommandDefinition::builder()
            .usage("my yob is <year>")
            .description("yob calculator")
            .examples(vec!["my yob is 2020".to_string()])
            .build()
    }

    #[test]
    fn captures_parameters() {
        let params = yob_command().match_text("my yob is 2020").expect("should match");
        assert_eq!(params.get("year").map(String::as_str), Some("2020"));
    }

    #[test]
    fn rejects_literal_mismatch() {
        assert!(yob_command().match_text("my age is 2020").is_none());
    }

    #[test]
    fn rejects_length_mismatch() {
        assert!(yob_command().match_text("my yob is").is_none());
        assert!(yob_command().match_text("my yob is 2020 please").is_none());
    }

    #[test]
    fn ignores_extra_whitespace() {
        let params = yob_command().match_text("  my  yob   is 1999 ").expect("should match");
        assert_eq!(params.get("year").map(String::as_str), Some("1999"));
    }
}
