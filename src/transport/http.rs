use crate::config::RunnerConfig;
use crate::Result;
use serde::Serialize;
use tracing::debug;

/// Status line and unparsed body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &RunnerConfig) -> Result<Self> {
        // No timeout unless one was asked for; the blocking client would otherwise
        // apply its own 30s default.
        let builder = reqwest::blocking::Client::builder().timeout(config.timeout);

        let client = builder
            .build()
            .map_err(|e| crate::Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST `body` as JSON and read the whole response as text.
    pub fn post_json<T: Serialize + ?Sized>(
        &self,
        body: &T,
    ) -> std::result::Result<RawResponse, TransportError> {
        debug!(endpoint = %self.endpoint, "sending POST");

        let response = self.client.post(&self.endpoint).json(body).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        debug!(status, bytes = body.len(), "response received");
        Ok(RawResponse { status, body })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
