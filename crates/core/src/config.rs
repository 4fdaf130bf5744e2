//! Session configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Default chromedriver TCP port.
pub const DEFAULT_PORT: u16 = 9515;

/// Configuration for [`BrowserSession::start`](crate::BrowserSession::start).
///
/// Named, typed, defaulted fields with builder-style setters:
///
/// ```ignore
/// let config = SessionConfig::new()
///     .port(4444)
///     .executable("/usr/bin/chromedriver");
/// ```
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// TCP port the driver listens on (default 9515).
    pub port: u16,
    /// Path to a driver binary. When set, the binary is launched as a child
    /// process bound to `port`; when absent, a server is assumed to already
    /// be listening there.
    pub executable: Option<PathBuf>,
    /// Browser requested during capability negotiation (default "Chrome").
    pub browser_name: String,
    /// Directory for the driver log file (default `target`).
    pub log_dir: PathBuf,
    /// Per-request timeout. `None` (the default) blocks indefinitely,
    /// matching the driver protocol's lack of cancellation.
    pub timeout: Option<Duration>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            executable: None,
            browser_name: "Chrome".to_string(),
            log_dir: PathBuf::from("target"),
            timeout: None,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the driver port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the driver binary to launch.
    pub fn executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.executable = Some(path.into());
        self
    }

    /// Set the browser name used in capability negotiation.
    pub fn browser_name(mut self, name: impl Into<String>) -> Self {
        self.browser_name = name.into();
        self
    }

    /// Set the directory that receives the driver log file.
    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    /// Set a per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base URL of the driver before session creation.
    pub fn base_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SessionConfig::new();
        assert_eq!(config.port, 9515);
        assert!(config.executable.is_none());
        assert_eq!(config.browser_name, "Chrome");
        assert_eq!(config.log_dir, PathBuf::from("target"));
        assert!(config.timeout.is_none());
    }

    #[test]
    fn builder_setters() {
        let config = SessionConfig::new()
            .port(4444)
            .executable("/usr/bin/chromedriver")
            .browser_name("Chromium")
            .timeout(Duration::from_secs(5));
        assert_eq!(config.port, 4444);
        assert_eq!(
            config.executable.as_deref(),
            Some(std::path::Path::new("/usr/bin/chromedriver"))
        );
        assert_eq!(config.browser_name, "Chromium");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.base_url(), "http://localhost:4444");
    }
}
