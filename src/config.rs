//! Runner configuration.
//!
//! Defaults reproduce the fixed request this tool was built around. Each value can be
//! overridden from the environment or through the builder-style setters:
//!
//! - `OLLAMA_GENERATE_URL`
//! - `OLLAMA_GENERATE_MODEL`
//! - `OLLAMA_GENERATE_PROMPT`
//! - `OLLAMA_GENERATE_TIMEOUT_SECS` (unset means no client timeout)

use crate::{Error, ErrorContext, Result};
use std::env;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "starcoder";
pub const DEFAULT_PROMPT: &str = "def compute_gcd(a,b):";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub endpoint: String,
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub timeout: Option<Duration>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            stream: false,
            timeout: None,
        }
    }
}

impl RunnerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(v) = lookup("OLLAMA_GENERATE_URL") {
            cfg.endpoint = v;
        }
        if let Some(v) = lookup("OLLAMA_GENERATE_MODEL") {
            cfg.model = v;
        }
        if let Some(v) = lookup("OLLAMA_GENERATE_PROMPT") {
            cfg.prompt = v;
        }
        cfg.timeout = lookup("OLLAMA_GENERATE_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_secs);
        cfg
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reject configurations that could never produce a request.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid endpoint URL: {}", e),
                ErrorContext::field("endpoint").with_value(self.endpoint.clone()),
            )
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::configuration_with_context(
                "endpoint must be an http(s) URL",
                ErrorContext::field("endpoint").with_value(self.endpoint.clone()),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "model must not be empty",
                ErrorContext::field("model"),
            ));
        }
        Ok(())
    }
}
