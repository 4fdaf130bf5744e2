//! Session capability negotiation types.

use serde::{Deserialize, Serialize};

/// Desired capabilities sent when creating a session.
///
/// Only the browser name is negotiated; chromedriver ignores the rest for
/// the legacy wire protocol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    /// Requested browser, e.g. `"Chrome"`
    #[serde(rename = "browserName")]
    pub browser_name: String,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            browser_name: "Chrome".to_string(),
        }
    }
}

/// Body for `POST /session`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSessionRequest {
    /// Legacy-protocol capability envelope
    #[serde(rename = "desiredCapabilities")]
    pub desired_capabilities: Capabilities,
}

impl NewSessionRequest {
    /// Request a session for the given browser.
    pub fn new(browser_name: impl Into<String>) -> Self {
        Self {
            desired_capabilities: Capabilities {
                browser_name: browser_name.into(),
            },
        }
    }
}

impl Default for NewSessionRequest {
    fn default() -> Self {
        Self {
            desired_capabilities: Capabilities::default(),
        }
    }
}
