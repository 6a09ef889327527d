//! Configuration for GeminiAdvisor.

use advisor_core::AdvisorError;
use std::env;

/// Configuration for GeminiAdvisor.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Generative Language API base URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: String::new(),
            model: "gemini-2.5-flash".to_string(),
            timeout_secs: 30,
        }
    }
}

impl GeminiConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `GEMINI_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `GEMINI_API_URL` - API URL (default: https://generativelanguage.googleapis.com)
    /// - `GEMINI_MODEL` - Model name (default: gemini-2.5-flash)
    /// - `GEMINI_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self, AdvisorError> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| AdvisorError::Configuration("GEMINI_API_KEY not set".to_string()))?;

        let api_url = env::var("GEMINI_API_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());

        let timeout_secs = match env::var("GEMINI_TIMEOUT_SECS") {
            Ok(value) => value.parse().map_err(|_| {
                AdvisorError::Configuration(format!("invalid GEMINI_TIMEOUT_SECS: {value}"))
            })?,
            Err(_) => 30,
        };

        Ok(Self {
            api_url,
            api_key,
            model,
            timeout_secs,
        })
    }
}
