//! # ollama-generate
//!
//! Sends one completion request to a local Ollama `/api/generate` endpoint and reports
//! what came back.
//!
//! ## Overview
//!
//! A run is a single blocking POST followed by a three-way branch:
//!
//! - the request never got a response (transport failure)
//! - the server answered with a status other than 200
//! - the server answered 200, and the body either carries a `response` key, lacks one,
//!   or is not JSON at all
//!
//! Each branch becomes an [`ExitOutcome`] that renders its own console text. Failures are
//! reported, never propagated.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ollama_generate::{RequestRunner, RunnerConfig};
//!
//! fn main() -> ollama_generate::Result<()> {
//!     let runner = RequestRunner::new(RunnerConfig::from_env())?;
//!     let outcome = runner.run();
//!     print!("{}", outcome.render());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Endpoint, model, prompt and timeout, with env overrides |
//! | [`runner`] | The request runner and outcome classification |
//! | [`transport`] | Blocking HTTP transport |
//! | [`types`] | Request payload and outcome types |
//! | [`utils`] | ASCII-escaped pretty JSON |

pub mod config;
pub mod runner;
pub mod transport;
pub mod types;
pub mod utils;

pub use config::RunnerConfig;
pub use runner::{classify, RequestRunner};
pub use types::{ExitOutcome, GenerateRequest};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
