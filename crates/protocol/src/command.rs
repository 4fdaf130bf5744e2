//! Request bodies for session commands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body for `POST url` - navigate the current window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateRequest {
    /// Destination URL
    pub url: String,
}

/// Body for `POST window` - re-assert which window is foregrounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchWindowRequest {
    /// Server-issued window handle
    pub handle: String,
}

/// Body for `POST element/{id}/value` - send keystrokes to an element.
///
/// The wire shape is a single-element array of the text to type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendKeysRequest {
    /// Keystroke payload
    pub value: Vec<String>,
}

impl SendKeysRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            value: vec![text.into()],
        }
    }
}

/// Body for `POST execute/sync` - run a script in the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptRequest {
    /// JavaScript source to evaluate
    pub script: String,
    /// Script arguments (always empty for this client)
    pub args: Vec<Value>,
}

impl ScriptRequest {
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            args: Vec::new(),
        }
    }
}
