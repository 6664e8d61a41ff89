//! HTTP transport for the single generate request.

pub mod http;

pub use http::{HttpTransport, RawResponse, TransportError};
