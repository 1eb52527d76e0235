use crate::error::GenAiError;
use crate::genai::gemini_request::GeminiRequest;
use regex::Regex;
use reqwest::Client;
use std::sync::LazyLock;
use tracing::{debug, warn};

static API_KEY_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"key=[^&]*").expect("valid api key pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Endpoint {
    #[strum(serialize = "generateContent")]
    Generate,
    #[strum(serialize = "streamGenerateContent")]
    StreamGenerate,
}

impl Endpoint {
    pub fn from_stream_flag(stream: bool) -> Self {
        if stream {
            Endpoint::StreamGenerate
        } else {
            Endpoint::Generate
        }
    }
}

pub fn endpoint_url(base_url: &str, model: &str, endpoint: Endpoint, api_key: &str) -> String {
    format!(
        "{}/{}:{}?key={}",
        base_url.trim_end_matches('/'),
        model,
        endpoint,
        api_key
    )
}

/// Replace the value of the `key` query parameter so URLs can be logged.
pub fn redact_api_key(url: &str) -> String {
    API_KEY_PARAM.replace_all(url, "key=***").to_string()
}

/// POST the request and return the raw body of a successful response.
pub async fn post_gemini(
    client: &Client,
    url: &str,
    request: &GeminiRequest,
) -> Result<String, GenAiError> {
    debug!("Calling Gemini API: {}", redact_api_key(url));

    let response = client
        .post(url)
        .header("Content-Type", "application/json")
        .json(request)
        .send()
        .await
        .map_err(|e| GenAiError::Http(e.without_url()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| GenAiError::Http(e.without_url()))?;

    if !status.is_success() {
        warn!("Gemini call failed with status: {} {}", status, body);
        return Err(GenAiError::Status { status, body });
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_flag_selects_endpoint() {
        assert_eq!(Endpoint::from_stream_flag(false).to_string(), "generateContent");
        assert_eq!(Endpoint::from_stream_flag(true).to_string(), "streamGenerateContent");
    }

    #[test]
    fn builds_templated_url() {
        let url = endpoint_url(
            "https://aiplatform.googleapis.com/v1/publishers/google/models",
            "gemini-2.5-flash-lite",
            Endpoint::Generate,
            "abc123",
        );
        assert_eq!(
            url,
            "https://aiplatform.googleapis.com/v1/publishers/google/models/gemini-2.5-flash-lite:generateContent?key=abc123"
        );
    }

    #[test]
    fn trailing_slash_on_base_url_is_ignored() {
        let url = endpoint_url("http://localhost:8080/", "m", Endpoint::StreamGenerate, "k");
        assert_eq!(url, "http://localhost:8080/m:streamGenerateContent?key=k");
    }

    #[test]
    fn redacts_key_parameter() {
        assert_eq!(
            redact_api_key("https://host/m:generateContent?key=secret&alt=json"),
            "https://host/m:generateContent?key=***&alt=json"
        );
        assert_eq!(redact_api_key("https://host/no-key"), "https://host/no-key");
    }
}
