//! Failure taxonomy for the chat endpoint.
//!
//! The reply pipeline treats every variant uniformly (one generic
//! assistant-visible failure message); the distinction exists for
//! diagnostics only.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    /// Network-level failure: unreachable host, timeout, TLS error.
    #[error("chat request failed: {0}")]
    Transport(String),

    /// Endpoint answered with a non-success status.
    #[error("chat endpoint returned status {0}")]
    Status(u16),

    /// Response body parsed but carried none of the configured reply
    /// fields.
    #[error("chat response missing reply field")]
    MissingReply,
}
