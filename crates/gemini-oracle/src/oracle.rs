//! GeminiOracle implementation using the Gemini REST API.

use analysis_core::{async_trait, Oracle, OracleError};
use reqwest::Client;
use tracing::{debug, info};

use crate::api_types::{
    ApiError, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use crate::config::GeminiConfig;

/// An oracle implementation that uses the Gemini API for text generation.
pub struct GeminiOracle {
    client: Client,
    config: GeminiConfig,
}

impl GeminiOracle {
    /// Create a new GeminiOracle with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, OracleError> {
        let client = Client::builder().build().map_err(|e| {
            OracleError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        info!("GeminiOracle initialized with model: {}", config.model);

        Ok(Self { client, config })
    }

    /// Create a GeminiOracle from environment variables.
    ///
    /// See [`GeminiConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, OracleError> {
        let config = GeminiConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn request_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url, self.config.model
        )
    }

    fn build_request(&self, prompt: &str) -> GenerateContentRequest {
        let generation_config =
            if self.config.max_output_tokens.is_some() || self.config.temperature.is_some() {
                Some(GenerationConfig {
                    max_output_tokens: self.config.max_output_tokens,
                    temperature: self.config.temperature,
                })
            } else {
                None
            };

        GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
            generation_config,
        }
    }
}

#[async_trait]
impl Oracle for GeminiOracle {
    async fn generate(&self, prompt: &str) -> Result<String, OracleError> {
        debug!(
            prompt_chars = prompt.chars().count(),
            model = %self.config.model,
            "Sending generate request to Gemini API"
        );

        let request = self.build_request(prompt);

        let response = self
            .client
            .post(self.request_url())
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| OracleError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(OracleError::RequestFailed(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(OracleError::RequestFailed(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| OracleError::RequestFailed(format!("Failed to parse response: {}", e)))?;

        completion
            .first_text()
            .ok_or_else(|| OracleError::RequestFailed("No candidates in response".to_string()))
    }

    fn name(&self) -> &str {
        "GeminiOracle"
    }
}
