//! Errors raised while loading the resume document or the translation table.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The request never produced a response (network failure, JS exception).
    #[error("fetch failed: {0}")]
    Fetch(String),
    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
