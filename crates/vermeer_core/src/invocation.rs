//! Inbound command types and diagnostic telemetry records.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use typed_builder::TypedBuilder;

/// An external command invocation delivered by the chat transport.
///
/// # Examples
///
/// ```
/// use vermeer_core::CommandInvocation;
///
/// let invocation = CommandInvocation::builder()
///     .actor_id("u1")
///     .context_id("c1")
///     .raw_text("my yob is 2020")
///     .build();
///
/// assert_eq!(invocation.actor_id(), "u1");
/// ```
#[derive(Debug, Clone, Getters, Serialize, Deserialize, TypedBuilder)]
pub struct CommandInvocation {
    /// Identifier of the invoking actor.
    #[builder(setter(into))]
    actor_id: String,

    /// Identifier of the context (channel) the command arrived in.
    #[builder(setter(into))]
    context_id: String,

    /// Raw text of the invocation.
    #[builder(setter(into))]
    raw_text: String,

    /// Named parameters extracted from the invocation.
    #[builder(default)]
    parameters: HashMap<String, String>,

    /// When the transport delivered the invocation.
    #[builder(default = Utc::now())]
    received_at: DateTime<Utc>,
}

impl CommandInvocation {
    /// Look up a named parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    /// Replace the extracted parameters.
    ///
    /// Used by the command matcher once a usage template has been applied
    /// to the raw text.
    pub fn with_parameters(mut self, parameters: HashMap<String, String>) -> Self {
        self.parameters = parameters;
        self
    }
}

/// Telemetry record describing one command invocation.
///
/// Consumed by the diagnostic tap purely for observability; carries no
/// coupling to dedup logic.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct CommandEvent {
    /// When the command was observed.
    timestamp: DateTime<Utc>,
    /// Name of the matched command.
    command: String,
    /// Parameters the command was invoked with.
    parameters: HashMap<String, String>,
    /// Raw text of the underlying invocation.
    raw_text: String,
}

impl CommandEvent {
    /// Build a telemetry record for a matched command invocation.
    pub fn from_invocation(command: impl Into<String>, invocation: &CommandInvocation) -> Self {
        Self {
            timestamp: *invocation.received_at(),
            command: command.into(),
            parameters: invocation.parameters().clone(),
            raw_text: invocation.raw_text().clone(),
        }
    }
}
