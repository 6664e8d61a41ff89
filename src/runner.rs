//! Single-shot request runner.
//!
//! Builds the payload, posts it once and turns whatever comes back into an
//! [`ExitOutcome`]. Nothing propagates out of [`RequestRunner::run`].

use crate::config::RunnerConfig;
use crate::transport::HttpTransport;
use crate::types::{ExitOutcome, GenerateRequest};
use crate::Result;
use std::io::{self, Write};
use tracing::{debug, warn};

/// Key holding the completion text in a generate response.
pub const RESPONSE_FIELD: &str = "response";

pub struct RequestRunner {
    config: RunnerConfig,
    transport: HttpTransport,
}

impl RequestRunner {
    pub fn new(config: RunnerConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }

    pub fn request(&self) -> GenerateRequest {
        GenerateRequest {
            model: self.config.model.clone(),
            prompt: self.config.prompt.clone(),
            stream: self.config.stream,
        }
    }

    pub fn run(&self) -> ExitOutcome {
        let request = self.request();
        debug!(model = %request.model, endpoint = %self.transport.endpoint(), "running generate request");

        let outcome = match self.transport.post_json(&request) {
            Ok(raw) => classify(raw.status, raw.body),
            Err(e) => {
                warn!(error = %e, "generate request failed before a response arrived");
                ExitOutcome::Transport {
                    error: e.to_string(),
                }
            }
        };

        debug!(success = outcome.is_success(), "request finished");
        outcome
    }

    /// Run once and write the outcome text to `out`.
    pub fn run_and_report<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<ExitOutcome> {
        let outcome = self.run();
        outcome.write_to(out)?;
        Ok(outcome)
    }
}

/// Map a received status and body onto an outcome.
pub fn classify(status: u16, body: String) -> ExitOutcome {
    if status != 200 {
        warn!(status, "non-200 response");
        return ExitOutcome::HttpStatus { status, body };
    }

    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(doc) => match doc.get(RESPONSE_FIELD) {
            Some(value) => ExitOutcome::Completion(value.clone()),
            None => {
                debug!("response body has no `{}` key", RESPONSE_FIELD);
                ExitOutcome::MissingField
            }
        },
        Err(e) => {
            warn!(error = %e, "response body is not valid JSON");
            ExitOutcome::BodyParseError {
                error: e.to_string(),
                raw_body: body,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_completion() {
        let outcome = classify(200, r#"{"model":"starcoder","response":"gcd","done":true}"#.into());
        assert_eq!(outcome, ExitOutcome::Completion(json!("gcd")));
    }

    #[test]
    fn test_classify_missing_field() {
        assert_eq!(classify(200, r#"{"other": 1}"#.into()), ExitOutcome::MissingField);
    }

    #[test]
    fn test_classify_non_object_json_is_missing_field() {
        assert_eq!(classify(200, "[1, 2]".into()), ExitOutcome::MissingField);
    }

    #[test]
    fn test_classify_null_response_is_completion() {
        assert_eq!(
            classify(200, r#"{"response": null}"#.into()),
            ExitOutcome::Completion(serde_json::Value::Null)
        );
    }

    #[test]
    fn test_classify_malformed_body_keeps_raw_text() {
        match classify(200, "not-json".into()) {
            ExitOutcome::BodyParseError { error, raw_body } => {
                assert!(!error.is_empty());
                assert_eq!(raw_body, "not-json");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_classify_non_200_ignores_body_shape() {
        assert_eq!(
            classify(404, r#"{"response": "ignored"}"#.into()),
            ExitOutcome::HttpStatus {
                status: 404,
                body: r#"{"response": "ignored"}"#.into(),
            }
        );
    }

    #[test]
    fn test_other_2xx_is_not_success() {
        assert!(matches!(
            classify(201, r#"{"response": "x"}"#.into()),
            ExitOutcome::HttpStatus { status: 201, .. }
        ));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(RequestRunner::new(RunnerConfig::new().with_endpoint("not a url")).is_err());
    }

    #[test]
    fn test_request_reflects_config() {
        let runner = RequestRunner::new(
            RunnerConfig::new()
                .with_model("codellama")
                .with_prompt("fn gcd("),
        )
        .unwrap();
        assert_eq!(runner.request(), GenerateRequest::new("codellama", "fn gcd("));
    }
}
