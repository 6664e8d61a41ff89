//! Small helpers shared across modules.

pub mod ascii_json;

pub use ascii_json::to_string_pretty_ascii;
