use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::errors::ProviderError;
use crate::language_utils::registry;
use crate::providers::TranslationBackend;

/// How long Ollama keeps the model loaded between keystrokes
const MODEL_KEEP_ALIVE: &str = "10m";

/// Ollama client for the `/api/generate` endpoint
#[derive(Debug)]
pub struct Ollama {
    /// Base URL of the Ollama API
    base_url: Url,
    /// Model used for every request
    model: String,
    /// HTTP client for making requests
    client: Client,
    /// Request timeout, reported in timeout errors
    timeout_secs: u64,
}

/// Generate request for the Ollama API
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Model name to use for generation
    model: String,
    /// Prompt to generate from
    prompt: String,
    /// System message to guide the model
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    /// Additional model parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<GenerationOptions>,
    /// Whether to stream the response
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
    /// How long to keep the model loaded in memory
    #[serde(skip_serializing_if = "Option::is_none")]
    keep_alive: Option<String>,
}

/// Generation options for the Ollama API
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

/// Generation response from the Ollama API
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Model name
    #[serde(default)]
    pub model: String,
    /// Generated text
    pub response: String,
    /// Whether the generation is complete
    #[serde(default)]
    pub done: bool,
}

impl GenerationRequest {
    /// Create a new non-streaming generation request
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            system: None,
            options: None,
            stream: Some(false),
            keep_alive: None,
        }
    }

    /// Set the system prompt
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.options.get_or_insert_with(GenerationOptions::default).temperature = Some(temperature);
        self
    }

    /// Cap the number of generated tokens
    pub fn max_tokens(mut self, num_predict: u32) -> Self {
        self.options.get_or_insert_with(GenerationOptions::default).num_predict = Some(num_predict);
        self
    }

    /// Set the keep-alive duration
    pub fn keep_alive(mut self, keep_alive: impl Into<String>) -> Self {
        self.keep_alive = Some(keep_alive.into());
        self
    }
}

/// Parse an endpoint string, defaulting the scheme to http
pub fn parse_endpoint(endpoint: &str) -> Result<Url, ProviderError> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(ProviderError::InvalidConfig("Endpoint cannot be empty".to_string()));
    }

    let url = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Url::parse(endpoint)
    } else {
        Url::parse(&format!("http://{}", endpoint))
    }
    .map_err(|e| ProviderError::InvalidConfig(format!("Invalid endpoint '{}': {}", endpoint, e)))?;

    if url.host_str().is_none() {
        return Err(ProviderError::InvalidConfig(format!("Invalid host in endpoint: {}", endpoint)));
    }

    Ok(url)
}

/// Translation prompt sent for one chat message
fn build_prompt(text: &str, source_code: &str, target_code: &str) -> String {
    let source = registry().normalize(source_code);
    let target = registry().normalize(target_code);
    format!(
        "Translate the following chat message from {} to {}. Reply with the translation only, without quotes or explanations. Write {} in its native script.\n\n{}",
        source.canonical_name(),
        target.canonical_name(),
        target.canonical_name(),
        text
    )
}

impl Ollama {
    /// Create a client for `endpoint` (e.g. "http://localhost:11434")
    pub fn new(endpoint: &str, model: impl Into<String>, timeout_secs: u64) -> Result<Self, ProviderError> {
        let base_url = parse_endpoint(endpoint)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            // Ollama uses HTTP/1.1
            .http1_only()
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| ProviderError::InvalidConfig(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { base_url, model: model.into(), client, timeout_secs })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text from the Ollama API, single attempt
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, ProviderError> {
        let url = self
            .base_url
            .join("api/generate")
            .map_err(|e| ProviderError::InvalidConfig(e.to_string()))?;

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, self.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Ollama API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError { status_code: status.as_u16(), message: error_text });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, self.timeout_secs))?;

        serde_json::from_str::<GenerationResponse>(&response_text).map_err(|e| {
            error!(
                "Failed to parse Ollama API response: {}. Raw response (first 200 chars): {}",
                e,
                response_text.chars().take(200).collect::<String>()
            );
            ProviderError::ParseError(e.to_string())
        })
    }
}

#[async_trait]
impl TranslationBackend for Ollama {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn translate_remote(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
    ) -> Result<String, ProviderError> {
        let request = GenerationRequest::new(&self.model, build_prompt(text, source_code, target_code))
            .system("You are a translator for casual chat messages.")
            .temperature(0.2)
            .max_tokens(256)
            .keep_alive(MODEL_KEEP_ALIVE);

        debug!("Ollama translating {} chars ({} -> {})", text.chars().count(), source_code, target_code);

        let response = self.generate(&request).await?;
        extract_translation(&response)
    }
}

/// Translation text from a finished generation
fn extract_translation(response: &GenerationResponse) -> Result<String, ProviderError> {
    if !response.done {
        return Err(ProviderError::ParseError(format!(
            "Generation from model '{}' did not finish",
            response.model
        )));
    }

    let translated = response.response.trim().trim_matches('"').trim();
    if translated.is_empty() {
        return Err(ProviderError::EmptyResponse);
    }

    Ok(translated.to_string())
}
