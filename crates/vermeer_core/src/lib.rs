//! Core data types for the Vermeer bot library.
//!
//! This crate defines the event and command types shared across the
//! workspace: [`EventRecord`] and [`Fingerprint`] identify observed events
//! for deduplication, while [`CommandInvocation`] and [`CommandEvent`]
//! carry inbound commands and their diagnostic telemetry.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod event;
mod invocation;
pub mod telemetry;

pub use event::{EventRecord, Fingerprint};
pub use invocation::{CommandEvent, CommandInvocation};
