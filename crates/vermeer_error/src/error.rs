//! Top-level error wrapper types.

use crate::{CommandError, ConfigError, PlatformError};

/// This is the foundation error enum. Additional variants will be added
/// by other vermeer crates as the workspace grows.
///
/// # Examples
///
/// ```
/// use vermeer_error::{VermeerError, PlatformError};
///
/// let platform_err = PlatformError::new("connection refused");
/// let err: VermeerError = platform_err.into();
/// assert!(format!("{}", err).contains("Platform Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VermeerErrorKind {
    /// Malformed command input
    #[from(CommandError)]
    Command(CommandError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Chat transport error
    #[from(PlatformError)]
    Platform(PlatformError),
}

/// Vermeer error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vermeer_error::{VermeerResult, ConfigError};
///
/// fn might_fail() -> VermeerResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vermeer Error: {}", _0)]
pub struct VermeerError(Box<VermeerErrorKind>);

impl VermeerError {
    /// Create a new error from a kind.
    pub fn new(kind: VermeerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VermeerErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VermeerErrorKind
impl<T> From<T> for VermeerError
where
    T: Into<VermeerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vermeer operations.
///
/// # Examples
///
/// ```
/// use vermeer_error::{VermeerResult, PlatformError};
///
/// fn send_reply() -> VermeerResult<()> {
///     Err(PlatformError::new("channel not found"))?
/// }
/// ```
pub type VermeerResult<T> = std::result::Result<T, VermeerError>;
