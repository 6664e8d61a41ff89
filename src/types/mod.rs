//! # Types Module
//!
//! The two ephemeral records of a run: the outbound payload and the classified outcome.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`GenerateRequest`] | JSON body posted to the generate endpoint |
//! | [`ExitOutcome`] | What happened, and the console text describing it |

pub mod outcome;
pub mod request;

pub use outcome::ExitOutcome;
pub use request::GenerateRequest;
