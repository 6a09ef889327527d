//! Suggestion request and response types.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// A request for candidate conditions matching a symptom description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    /// Raw symptom text, exactly as the user entered it.
    pub symptoms: String,
    /// Language the answer should be written in.
    pub language: Language,
}

impl SuggestionRequest {
    /// Create a request.
    pub fn new(symptoms: impl Into<String>, language: Language) -> Self {
        Self {
            symptoms: symptoms.into(),
            language,
        }
    }
}

/// Free-form suggestion text from a provider.
///
/// Downstream stores persist `text` verbatim without parsing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Language the provider was asked to answer in.
    pub language: Language,
    /// The suggestion text.
    pub text: String,
}

impl Suggestion {
    /// Create a suggestion.
    pub fn new(language: Language, text: impl Into<String>) -> Self {
        Self {
            language,
            text: text.into(),
        }
    }
}
