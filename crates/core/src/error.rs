//! Error types for the WebDriver client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur driving a WebDriver session.
///
/// There is no retry policy and no transient/fatal distinction: any failure
/// aborts the in-progress operation and propagates to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level HTTP failure (connection refused, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Server returned {code}: {body}")]
    Status { code: u16, body: String },

    /// A response body did not match the expected envelope.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A response was missing a field the protocol requires.
    #[error("Response missing '{0}'")]
    MissingField(&'static str),

    /// Element lookup returned no match for the locator.
    #[error("Element not found: locator '{0}'")]
    ElementNotFound(String),

    /// Failed to launch the driver process.
    #[error(transparent)]
    Launch(#[from] wd_runtime::Error),
}

impl Error {
    /// Returns true if this failure was a tripped request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_timeout())
    }
}
