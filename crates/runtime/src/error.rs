//! Error types for the driver runtime.

use thiserror::Error;

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur managing the driver process.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to launch the driver process.
    #[error("Failed to launch driver: {0}. Check the executable path.")]
    LaunchFailed(String),

    /// I/O error (log file creation, working directory).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
