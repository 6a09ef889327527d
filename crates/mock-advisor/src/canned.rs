//! Canned advisor - always answers with a fixed text.

use advisor_core::{async_trait, Advisor, AdvisorError, Suggestion, SuggestionRequest};

/// An advisor that returns a fixed response regardless of input.
///
/// Useful for exercising the analysis flow without any provider calls.
#[derive(Debug, Clone)]
pub struct CannedAdvisor {
    response: String,
}

impl Default for CannedAdvisor {
    fn default() -> Self {
        Self::new("- Common cold: a mild viral infection of the nose and throat.")
    }
}

impl CannedAdvisor {
    /// Create a CannedAdvisor with a custom response.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl Advisor for CannedAdvisor {
    async fn suggest(&self, request: SuggestionRequest) -> Result<Suggestion, AdvisorError> {
        Ok(Suggestion::new(request.language, self.response.clone()))
    }

    fn name(&self) -> &str {
        "CannedAdvisor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_core::Language;

    #[tokio::test]
    async fn test_canned_response() {
        let advisor = CannedAdvisor::new("canned text");
        let suggestion = advisor
            .suggest(SuggestionRequest::new("fever", Language::Hi))
            .await
            .unwrap();

        assert_eq!(suggestion.text, "canned text");
        assert_eq!(suggestion.language, Language::Hi);
    }
}
