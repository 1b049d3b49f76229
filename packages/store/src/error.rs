//! Errors produced by a [`crate::UserBackend`].
//!
//! The store treats every variant the same way (log and move on). The split
//! exists so log lines say which stage of the request went wrong.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The request never produced a response (DNS, TLS, connection reset, ...).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status code.
    #[error("server responded with status {status}")]
    Status { status: u16 },
    /// The response body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
