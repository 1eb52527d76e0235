use serde_json::Value;
use tracing::warn;

/// Text of `candidates[0].content.parts[0].text`, ignoring every other field.
pub fn first_text(response: &Value) -> Option<&str> {
    response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}

/**
Extract the generated text from a raw response body.

Never fails: a body without text, or one that is not JSON, is turned into a
diagnostic string that embeds the raw body. Only the path to the first text is
looked at, so unexpected values elsewhere in the body do not matter.

A top-level JSON array is taken as the buffered reply of `streamGenerateContent`,
one response per chunk, and the texts of its chunks are concatenated in order.
This applies whatever endpoint produced the body; a plain `generateContent`
reply is never an array.
*/
pub fn parse_response(body: &str) -> String {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            warn!("Failed to decode Gemini response: {}", e);
            return format!("Failed to parse response: {e}\nResponse: {body}");
        }
    };

    match extract_text(&value) {
        Some(text) => text,
        None => {
            warn!("No text in Gemini response");
            format!("No response text found in: {body}")
        }
    }
}

fn extract_text(value: &Value) -> Option<String> {
    match value {
        Value::Array(chunks) => {
            let texts: Vec<&str> = chunks.iter().filter_map(first_text).collect();
            if texts.is_empty() {
                None
            } else {
                Some(texts.concat())
            }
        }
        _ => first_text(value).map(String::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_first_text_verbatim() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"hello"}]}}]}"#;
        assert_eq!(parse_response(body), "hello");
    }

    #[test]
    fn ignores_extra_fields_and_later_parts() {
        let body = r#"{
            "candidates": [
                {
                    "content": {"role": "model", "parts": [{"text": "first"}, {"text": "second"}]},
                    "finishReason": "STOP",
                    "avgLogprobs": -0.12
                },
                {"content": {"parts": [{"text": "other candidate"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 4, "candidatesTokenCount": 2, "totalTokenCount": 6},
            "modelVersion": "gemini-2.5-flash-lite"
        }"#;
        assert_eq!(parse_response(body), "first");
    }

    #[test]
    fn unexpected_values_off_the_text_path_are_ignored() {
        for body in [
            r#"{"candidates":[{"content":{"parts":[{"text":"hello"}]}}],"modelVersion":2}"#,
            r#"{"candidates":[{"content":{"parts":[{"text":"hello"}]},"index":"0"}]}"#,
            r#"{"candidates":[{"content":{"parts":[{"text":"hello"}]}}],"usageMetadata":{"totalTokenCount":1.5}}"#,
            r#"{"candidates":[{"content":{"parts":[{"text":"hello"}]}},"junk"]}"#,
            r#"{"candidates":[{"content":{"parts":[{"text":"hello"},42]}}]}"#,
        ] {
            assert_eq!(parse_response(body), "hello", "body {body}");
        }
    }

    #[test]
    fn empty_candidates_embed_raw_body() {
        let body = r#"{"candidates":[]}"#;
        let res = parse_response(body);
        assert!(res.starts_with("No response text found in: "));
        assert!(res.contains(r#""candidates":[]"#));
    }

    #[test]
    fn missing_levels_fall_back() {
        for body in [
            r#"{}"#,
            r#"{"candidates":[{}]}"#,
            r#"{"candidates":[{"content":{}}]}"#,
            r#"{"candidates":[{"content":{"parts":[]}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{}]}}]}"#,
            r#"{"candidates":"nope"}"#,
            r#"{"candidates":[{"content":{"parts":[{"text":7}]}}]}"#,
            r#""just a string""#,
        ] {
            let res = parse_response(body);
            assert_eq!(res, format!("No response text found in: {body}"));
        }
    }

    #[test]
    fn not_json_reports_parse_failure() {
        let res = parse_response("not json");
        assert!(res.starts_with("Failed to parse response: "));
        assert!(res.ends_with("\nResponse: not json"));
    }

    #[test]
    fn stream_chunks_are_concatenated_in_order() {
        let body = r#"[
            {"candidates":[{"content":{"parts":[{"text":"Hel"}]}}]},
            {"candidates":[]},
            "junk",
            {"candidates":[{"content":{"parts":[{"text":"lo"}]}}],"modelVersion":2}
        ]"#;
        assert_eq!(parse_response(body), "Hello");
    }

    #[test]
    fn stream_without_text_falls_back() {
        let body = r#"[{"candidates":[]}]"#;
        assert_eq!(parse_response(body), format!("No response text found in: {body}"));
        assert_eq!(parse_response("[]"), "No response text found in: []");
    }
}
