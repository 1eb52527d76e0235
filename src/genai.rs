mod api;
mod gemini_request;
mod gemini_response;

pub use self::api::{endpoint_url, redact_api_key, Endpoint};
pub use self::gemini_request::*;
pub use self::gemini_response::*;

use crate::config::GenAiConfig;
use crate::error::GenAiError;
use crate::genai::api::post_gemini;
use reqwest::Client;
use tracing::{debug, info};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";

/// Joins prompts with a blank line between each consecutive pair.
pub fn combine_prompts<S: AsRef<str>>(prompts: &[S]) -> String {
    prompts
        .iter()
        .map(|prompt| prompt.as_ref())
        .collect::<Vec<&str>>()
        .join("\n\n")
}

/// Client for the Gemini `generateContent` REST endpoint.
///
/// Holds one `reqwest::Client`, cloning the client shares it.
#[derive(Clone)]
pub struct GenAiClient {
    http: Client,
    config: GenAiConfig,
}

impl GenAiClient {
    pub fn new(config: GenAiConfig) -> Result<Self, GenAiError> {
        if config.api_key.is_empty() {
            return Err(GenAiError::Config("API key is empty".to_string()));
        }

        info!(
            "Gen AI client initialized, model: {}, vertex ai: {}",
            config.default_model, config.use_vertex_ai
        );

        Ok(Self {
            http: Client::new(),
            config,
        })
    }

    pub fn default_model(&self) -> &str {
        &self.config.default_model
    }

    pub fn uses_vertex_ai(&self) -> bool {
        self.config.use_vertex_ai
    }

    pub async fn generate_content(&self, prompt: &str) -> Result<String, GenAiError> {
        self.generate_content_with_stream(prompt, false).await
    }

    pub async fn generate_content_with_stream(
        &self,
        prompt: &str,
        stream: bool,
    ) -> Result<String, GenAiError> {
        self.generate_content_with_model(prompt, &self.config.default_model, stream)
            .await
    }

    /**
    Send `prompt` to `model` and return the generated text.

    With `stream` the `streamGenerateContent` endpoint is called. Its reply is still
    read whole, then the text of every chunk is concatenated.

    Non-success statuses and network failures are errors. A reply without text is
    not: see [`parse_response`].
    */
    pub async fn generate_content_with_model(
        &self,
        prompt: &str,
        model: &str,
        stream: bool,
    ) -> Result<String, GenAiError> {
        debug!("Prompt: \n{}", prompt);

        let endpoint = Endpoint::from_stream_flag(stream);
        let url = endpoint_url(&self.config.base_url, model, endpoint, &self.config.api_key);
        let request = GeminiRequest::from_prompt(prompt);

        info!("Calling Gemini {} on model {}", endpoint, model);
        let body = post_gemini(&self.http, &url, &request).await?;

        Ok(parse_response(&body))
    }

    pub async fn generate_content_from_prompts<S: AsRef<str>>(
        &self,
        prompts: &[S],
    ) -> Result<String, GenAiError> {
        self.generate_content(&combine_prompts(prompts)).await
    }
}
