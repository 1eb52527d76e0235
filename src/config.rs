//! Configuration of the Gen AI client

use crate::error::GenAiError;
use crate::genai::DEFAULT_MODEL;

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const USE_VERTEX_AI_VAR: &str = "GOOGLE_GENAI_USE_VERTEXAI";
pub const DEFAULT_BASE_URL: &str = "https://aiplatform.googleapis.com/v1/publishers/google/models";

/// Settings handed to [`crate::genai::GenAiClient::new`].
///
/// `use_vertex_ai` is kept for callers that want to know how the key was issued,
/// both values talk to the same base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct GenAiConfig {
    pub api_key: String,
    pub use_vertex_ai: bool,
    pub base_url: String,
    pub default_model: String,
}

impl GenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            use_vertex_ai: false,
            base_url: DEFAULT_BASE_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Reads `GOOGLE_API_KEY` and `GOOGLE_GENAI_USE_VERTEXAI`, a `.env` file included.
    pub fn from_env() -> Result<Self, GenAiError> {
        Self::from_lookup(|name| dotenv::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, GenAiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| GenAiError::Config(format!("{API_KEY_VAR} environment variable is not set")))?;

        let use_vertex_ai = lookup(USE_VERTEX_AI_VAR)
            .map(|value| parse_bool(&value))
            .unwrap_or(false);

        Ok(Self::new(api_key).with_vertex_ai(use_vertex_ai))
    }

    pub fn with_vertex_ai(mut self, use_vertex_ai: bool) -> Self {
        self.use_vertex_ai = use_vertex_ai;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }
}

// only a case-insensitive "true" counts
fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}
