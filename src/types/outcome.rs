//! Classified result of one generate request.

use crate::utils::to_string_pretty_ascii;
use std::fmt;
use std::io::{self, Write};

pub const MISSING_FIELD_MESSAGE: &str = "response field does not exist.";

/// One variant per way a run can end. Every variant renders to console text;
/// none of them is raised as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ExitOutcome {
    /// Status 200, JSON body with a `response` key.
    Completion(serde_json::Value),
    /// Status 200, JSON body without a `response` key.
    MissingField,
    /// Status 200, body is not JSON.
    BodyParseError { error: String, raw_body: String },
    /// Any status other than 200.
    HttpStatus { status: u16, body: String },
    /// No response at all (refused, unreachable, timed out, DNS).
    Transport { error: String },
}

impl ExitOutcome {
    /// Exact stdout text for this outcome.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.render().as_bytes())?;
        out.flush()
    }

    /// `MissingField` is informational and counts as success.
    pub fn is_success(&self) -> bool {
        matches!(self, ExitOutcome::Completion(_) | ExitOutcome::MissingField)
    }

    /// Process exit status. Without `strict` every outcome exits 0.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if !strict || self.is_success() {
            0
        } else {
            1
        }
    }
}

impl fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitOutcome::Completion(value) => {
                let pretty = to_string_pretty_ascii(value).map_err(|_| fmt::Error)?;
                writeln!(f, "{}", pretty)
            }
            ExitOutcome::MissingField => writeln!(f, "{}", MISSING_FIELD_MESSAGE),
            ExitOutcome::BodyParseError { error, raw_body } => {
                writeln!(f, "JSON parse error: {}", error)?;
                writeln!(f, "Raw response body:")?;
                writeln!(f, "{}", raw_body)
            }
            ExitOutcome::HttpStatus { status, body } => {
                writeln!(f, "Request failed with status code: {}", status)?;
                writeln!(f, "{}", body)
            }
            ExitOutcome::Transport { error } => writeln!(f, "Error during request: {}", error),
        }
    }
}
