//! Generate request payload.

use serde::Serialize;

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

impl GenerateRequest {
    /// Non-streaming request for `prompt`.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_to_expected_body() {
        let req = GenerateRequest::new("starcoder", "def compute_gcd(a,b):");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"model": "starcoder", "prompt": "def compute_gcd(a,b):", "stream": false})
        );
    }

    #[test]
    fn test_field_order_is_stable() {
        let req = GenerateRequest::new("m", "p");
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"model":"m","prompt":"p","stream":false}"#
        );
    }
}
