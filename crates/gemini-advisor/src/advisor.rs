//! GeminiAdvisor implementation using the Generative Language API.

use advisor_core::{async_trait, Advisor, AdvisorError, Language, Suggestion, SuggestionRequest};
use reqwest::Client;
use tracing::{debug, info};

use crate::api_types::{ApiError, GenerateContentRequest, GenerateContentResponse};
use crate::config::GeminiConfig;

/// Disclaimer line the model is instructed to end every answer with.
const DISCLAIMER: &str = "*Disclaimer:* I am an AI assistant and not a medical professional. \
    This information is not a diagnosis. Please consult a qualified healthcare provider for \
    medical advice.";

/// An advisor implementation backed by Gemini.
pub struct GeminiAdvisor {
    client: Client,
    config: GeminiConfig,
}

impl GeminiAdvisor {
    /// Create a new GeminiAdvisor with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, AdvisorError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                AdvisorError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        info!("GeminiAdvisor initialized with model: {}", config.model);

        Ok(Self { client, config })
    }

    /// Create a GeminiAdvisor from environment variables.
    ///
    /// See [`GeminiConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, AdvisorError> {
        let config = GeminiConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Build the prompt for a request.
    fn build_prompt(request: &SuggestionRequest) -> String {
        let language_instruction = match request.language {
            Language::En => "Answer in English.",
            Language::Hi => "Answer in Hindi (हिन्दी).",
            Language::Pa => "Answer in Punjabi (ਪੰਜਾਬੀ).",
        };

        format!(
            "As a medical information assistant, analyze these symptoms: \"{symptoms}\"\n\n\
             Provide 3-5 possible medical conditions with brief, clear descriptions, \
             formatted as bullet points. Maintain a professional medical tone. \
             {language_instruction}\n\n\
             End with this exact disclaimer:\n\"{disclaimer}\"",
            symptoms = request.symptoms,
            language_instruction = language_instruction,
            disclaimer = DISCLAIMER,
        )
    }

    /// Make a `generateContent` request to the API.
    async fn generate_content(&self, prompt: String) -> Result<String, AdvisorError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url, self.config.model
        );

        let request = GenerateContentRequest::from_prompt(prompt);

        debug!("Sending request to Gemini API: {:?}", request);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AdvisorError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(AdvisorError::Api(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(AdvisorError::Api(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AdvisorError::Api(format!("Failed to parse response: {}", e)))?;

        completion
            .first_text()
            .ok_or_else(|| AdvisorError::Api("Response contained no candidates".to_string()))
    }
}

#[async_trait]
impl Advisor for GeminiAdvisor {
    async fn suggest(&self, request: SuggestionRequest) -> Result<Suggestion, AdvisorError> {
        debug!(
            language = request.language.code(),
            "Requesting suggestion for symptoms"
        );

        let prompt = Self::build_prompt(&request);
        let text = self.generate_content(prompt).await?;

        Ok(Suggestion::new(request.language, text))
    }

    fn name(&self) -> &str {
        "GeminiAdvisor"
    }

    async fn is_ready(&self) -> bool {
        !self.config.api_key.is_empty()
    }
}
