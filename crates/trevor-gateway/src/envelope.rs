//! Response envelope codec.
//!
//! Every request that reaches the process handler gets exactly one of two
//! JSON shapes back:
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | [`Envelope::Success`] | `200` | `{"error":false,"type":…,"data":…}` |
//! | [`Envelope::Failure`] | `400` | `{"error":true,"message":…}` |
//!
//! The `error` flag is derived from the variant during serialization, so a
//! body can never disagree with its status code.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;
use std::collections::HashMap;
use trevor_kernel::Processed;

/// `Content-Type` for every response on the gateway route.
pub const APPLICATION_JSON: &str = "application/json";

/// The JSON envelope returned for a processed request.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Success { kind: String, data: Value },
    Failure { message: String },
}

impl Envelope {
    pub fn success(output: Processed) -> Self {
        Envelope::Success {
            kind: output.kind,
            data: output.data,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Envelope::Failure {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Envelope::Failure { .. })
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Envelope::Success { .. } => StatusCode::OK,
            Envelope::Failure { .. } => StatusCode::BAD_REQUEST,
        }
    }

    /// Serialize to bytes.  The shapes are fixed, so failure here is not
    /// expected; if it happens the body is left empty.
    pub fn to_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_else(|err| {
            tracing::error!(error = %err, "failed to serialize response envelope");
            Vec::new()
        })
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Envelope::Success { kind, data } => {
                let mut s = serializer.serialize_struct("Envelope", 3)?;
                s.serialize_field("error", &false)?;
                s.serialize_field("type", kind)?;
                s.serialize_field("data", data)?;
                s.end()
            }
            Envelope::Failure { message } => {
                let mut s = serializer.serialize_struct("Envelope", 2)?;
                s.serialize_field("error", &true)?;
                s.serialize_field("message", message)?;
                s.end()
            }
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))],
            self.to_bytes(),
        )
            .into_response()
    }
}

/// Pull the input text out of a JSON request body.
///
/// The body must be a JSON object whose values are all strings.  Returns the
/// trimmed text when `field` holds at least one non-whitespace character.
/// Malformed JSON, a non-object body, any non-string value, a missing field
/// and blank text all yield `None`.
pub fn extract_text(body: &[u8], field: &str) -> Option<String> {
    let mut object: HashMap<String, String> = serde_json::from_slice(body).ok()?;
    let text = object.remove(field)?;
    let trimmed = text.trim();
    (trimmed.chars().count() > 0).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_shape() {
        let env = Envelope::success(Processed::new("greeting", json!({ "reply": "hi" })));
        let body: Value = serde_json::from_slice(&env.to_bytes()).unwrap();
        assert_eq!(
            body,
            json!({ "error": false, "type": "greeting", "data": { "reply": "hi" } })
        );
        assert_eq!(env.status(), StatusCode::OK);
        assert!(!env.is_error());
    }

    #[test]
    fn failure_shape() {
        let env = Envelope::failure("backend unavailable");
        let body: Value = serde_json::from_slice(&env.to_bytes()).unwrap();
        assert_eq!(body, json!({ "error": true, "message": "backend unavailable" }));
        assert_eq!(env.status(), StatusCode::BAD_REQUEST);
        assert!(env.is_error());
    }

    #[test]
    fn success_keeps_null_data() {
        let env = Envelope::success(Processed::new("empty", Value::Null));
        let body: Value = serde_json::from_slice(&env.to_bytes()).unwrap();
        assert_eq!(body, json!({ "error": false, "type": "empty", "data": null }));
    }

    #[test]
    fn into_response_sets_status_and_content_type() {
        let resp = Envelope::failure("nope").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
    }

    #[test]
    fn extract_text_trims() {
        assert_eq!(
            extract_text(br#"{"text": "  hello  "}"#, "text"),
            Some("hello".to_string())
        );
    }

    #[test]
    fn extract_text_counts_code_points_not_bytes() {
        assert_eq!(extract_text(r#"{"text": " é "}"#.as_bytes(), "text"), Some("é".into()));
    }

    #[test]
    fn extract_text_rejects_blank_and_missing() {
        assert_eq!(extract_text(br#"{"text": ""}"#, "text"), None);
        assert_eq!(extract_text(br#"{"text": " \t\n "}"#, "text"), None);
        assert_eq!(extract_text(br#"{}"#, "text"), None);
        assert_eq!(extract_text(br#"{"query": "hello"}"#, "text"), None);
    }

    #[test]
    fn extract_text_rejects_malformed_bodies() {
        assert_eq!(extract_text(b"", "text"), None);
        assert_eq!(extract_text(br#"{"text": "hel"#, "text"), None);
        assert_eq!(extract_text(br#"["text"]"#, "text"), None);
        assert_eq!(extract_text(b"\xff\xfe", "text"), None);
    }

    #[test]
    fn extract_text_rejects_non_string_values() {
        assert_eq!(extract_text(br#"{"text": 42}"#, "text"), None);
        assert_eq!(extract_text(br#"{"text": null}"#, "text"), None);
        assert_eq!(extract_text(br#"{"text": ["a"]}"#, "text"), None);
    }

    #[test]
    fn extract_text_accepts_other_string_fields() {
        assert_eq!(
            extract_text(br#"{"text": "hi", "lang": "en"}"#, "text"),
            Some("hi".into())
        );
    }

    #[test]
    fn extract_text_rejects_any_non_string_sibling() {
        assert_eq!(extract_text(br#"{"text": "hi", "n": 1}"#, "text"), None);
        assert_eq!(extract_text(br#"{"text": "hi", "meta": {}}"#, "text"), None);
        assert_eq!(extract_text(br#"{"text": "hi", "flag": null}"#, "text"), None);
    }
}
