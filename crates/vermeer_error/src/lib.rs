//! Error types for the Vermeer library.
//!
//! This crate provides the foundation error types used throughout the Vermeer
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - Concrete error structs define specific failure conditions
//! - `VermeerError` wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vermeer_error::{VermeerResult, ConfigError};
//!
//! fn load_settings() -> VermeerResult<String> {
//!     Err(ConfigError::new("missing field `dedup`"))?
//! }
//!
//! match load_settings() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod config;
mod error;
mod platform;

pub use command::CommandError;
pub use config::ConfigError;
pub use error::{VermeerError, VermeerErrorKind, VermeerResult};
pub use platform::PlatformError;
