use serde::{Deserialize, Serialize};

pub const USER_ROLE: &str = "user";

/// Body of a `generateContent` / `streamGenerateContent` call.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<RequestContent>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContent {
    pub role: String,
    pub parts: Vec<RequestPart>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPart {
    pub text: String,
}

impl GeminiRequest {
    /// A single user turn holding the prompt as its only part.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                role: USER_ROLE.to_string(),
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}
