//! Error types for store access.
//!
//! - [`StoreError::Upstream`] — The store answered with a non-2xx status; the
//!   upstream status code and body are preserved verbatim for the caller to
//!   surface.
//! - [`StoreError::Transport`] — The request never produced an HTTP status
//!   (connect, TLS, timeout, body read). A single attempt is made, no retry.
//! - [`StoreError::Parse`] — A 2xx body did not match the SPARQL JSON results
//!   shape.

use thiserror::Error;

/// Errors raised while querying the graph store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("graph store returned HTTP {status}: {detail}")]
    Upstream { status: u16, detail: String },
    #[error("HTTP transport error: {0}")]
    Transport(String),
    #[error("unexpected response shape: {0}")]
    Parse(String),
}

/// Convenience alias for store-level results.
pub type StoreResult<T> = Result<T, StoreError>;
