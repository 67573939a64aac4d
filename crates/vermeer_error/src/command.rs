//! Command error types.

/// Error raised when a command parameter fails to parse into its expected
/// shape, e.g. a non-numeric year.
///
/// Command errors are reported back to the requester and never crash the
/// service.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Command Error: {} at line {} in {}", message, line, file)]
pub struct CommandError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl CommandError {
    /// Create a new CommandError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use vermeer_error::CommandError;
    ///
    /// let err = CommandError::new("year is not a number");
    /// assert!(err.message.contains("not a number"));
    /// ```
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
