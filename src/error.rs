use crate::transport::TransportError;
use thiserror::Error;

/// Which configuration value was rejected, and what it held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    pub field: String,
    pub value: Option<String>,
}

impl ErrorContext {
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            field: name.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Errors raised while setting up a runner.
///
/// Request outcomes (network failure, bad status, bad body) are not errors here;
/// they are reported through [`crate::ExitOutcome`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message} ({})", describe(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),
}

fn describe(ctx: &ErrorContext) -> String {
    match ctx.value {
        Some(ref value) => format!("{}: {:?}", ctx.field, value),
        None => ctx.field.clone(),
    }
}

impl Error {
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}
