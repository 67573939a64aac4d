//! Chat platform error types.

/// Error raised by the chat transport, e.g. a failed message send or a
/// terminated listen loop.
///
/// Transport failures are fatal to the service and propagate to the top
/// level.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Platform Error: {} at line {} in {}", message, line, file)]
pub struct PlatformError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl PlatformError {
    /// Create a new PlatformError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
