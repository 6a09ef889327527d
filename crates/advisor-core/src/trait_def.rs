//! The Advisor trait definition.

use async_trait::async_trait;

use crate::error::AdvisorError;
use crate::request::{Suggestion, SuggestionRequest};

/// A trait for turning symptom descriptions into candidate-condition text.
///
/// Implementations range from canned test doubles to hosted LLM backends.
/// This trait is object-safe and can be used with `Box<dyn Advisor>` or
/// `Arc<dyn Advisor>`.
#[async_trait]
pub trait Advisor: Send + Sync {
    /// Produce suggestion text for the given symptoms.
    ///
    /// # Arguments
    ///
    /// * `request` - Symptom text plus the language to answer in.
    ///
    /// # Returns
    ///
    /// A `Suggestion` with free-form text, or an error if the provider
    /// failed.
    async fn suggest(&self, request: SuggestionRequest) -> Result<Suggestion, AdvisorError>;

    /// Get a human-readable name for this advisor implementation.
    fn name(&self) -> &str;

    /// Check if the advisor is ready to serve requests.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}
