//! Failing advisor - always errors.

use advisor_core::{async_trait, Advisor, AdvisorError, Suggestion, SuggestionRequest};

/// An advisor that fails every request.
///
/// Useful for testing the degraded path where provider errors are
/// surfaced to the user and stored as error text.
#[derive(Debug, Clone, Default)]
pub struct FailingAdvisor;

impl FailingAdvisor {
    /// Create a new FailingAdvisor.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Advisor for FailingAdvisor {
    async fn suggest(&self, _request: SuggestionRequest) -> Result<Suggestion, AdvisorError> {
        Err(AdvisorError::Api("mock failure".to_string()))
    }

    fn name(&self) -> &str {
        "FailingAdvisor"
    }

    async fn is_ready(&self) -> bool {
        false
    }
}
