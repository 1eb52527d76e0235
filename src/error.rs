//! Errors returned by the Gen AI client

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenAiError {
    /// Missing or empty credential, raised before any request is sent.
    #[error("configuration: {0}")]
    Config(String),

    /// The endpoint answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Connection or IO failure. The request URL is stripped, it carries the API key.
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
}
