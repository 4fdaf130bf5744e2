//! Response envelopes, typed per endpoint.
//!
//! The legacy wire protocol wraps every result the same way: session
//! creation carries `sessionId` at the top level, everything else lives
//! under a `value` key, and element references are objects with a single
//! `ELEMENT` field. Deserializing into these envelopes replaces the
//! original json-path-style dynamic access with checked extraction.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response to `POST /session`.
///
/// `sessionId` is optional on the wire; a missing or null id means the
/// negotiation failed and is surfaced by the client as an error.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSessionResponse {
    /// Server-issued session identifier
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
    /// Negotiated capabilities (unused beyond logging)
    #[serde(default)]
    pub value: Value,
}

/// The `$.value` envelope used by most GET endpoints
/// (`window`, `url`, `element/{id}/text`, `element/{id}/attribute/...`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueResponse<T> {
    pub value: T,
}

/// An element reference as returned inside `$.value` by `POST element`.
///
/// The legacy wire key is literally `ELEMENT`. Null when nothing matched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementRef {
    #[serde(rename = "ELEMENT")]
    pub element: Option<String>,
}
