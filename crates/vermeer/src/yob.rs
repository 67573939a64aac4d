//! Year-of-birth demo command handler.

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use vermeer_bot::CommandHandler;
use vermeer_core::CommandInvocation;
use vermeer_error::{CommandError, VermeerResult};

/// Demonstration handler for the `my yob is <year>` command.
///
/// Computes an age from the supplied year of birth. The reference year is
/// taken from the clock at construction (or injected via [`Self::new`])
/// rather than hard-coded, so replies stay correct across year boundaries.
#[derive(Debug, Clone)]
pub struct YearOfBirthHandler {
    reference_year: i32,
}

impl YearOfBirthHandler {
    /// Create a handler computing ages against the given reference year.
    pub fn new(reference_year: i32) -> Self {
        Self { reference_year }
    }
}

impl Default for YearOfBirthHandler {
    fn default() -> Self {
        Self::new(Utc::now().year())
    }
}

#[async_trait]
impl CommandHandler for YearOfBirthHandler {
    async fn handle(&self, invocation: &CommandInvocation) -> VermeerResult<String> {
        let year = invocation
            .param("year")
            .ok_or_else(|| CommandError::new("missing parameter `year`"))?;

        let yob: i32 = year
            .parse()
            .map_err(|_| CommandError::new(format!("`{year}` is not a valid year")))?;

        let age = self.reference_year - yob;
        Ok(format!("age is {age}"))
    }
}
