//! Blocking HTTP layer.
//!
//! A thin wrapper around `reqwest::blocking` holding the mutable base URL:
//! the client starts at `http://localhost:{port}` and is rebased to
//! `.../session/{sessionId}` once the session exists. Responses are parsed
//! to `serde_json::Value` here; typed envelope extraction happens at the
//! call sites.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use crate::error::{Error, Result};

/// JSON-over-HTTP wire client with a rebasable base URL.
#[derive(Debug)]
pub struct WireClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl WireClient {
    /// Build a client for the given base URL.
    ///
    /// With `timeout` of `None` requests block indefinitely; reqwest's
    /// default timeout is disabled to match.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Swap the base URL (after session creation).
    pub fn rebase(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Current base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// `GET {base}/{path}`, returning the parsed JSON body.
    pub fn get(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        trace!(%url, "GET");
        Self::read(self.client.get(&url).send()?)
    }

    /// `POST {base}/{path}` with a JSON body, returning the parsed JSON
    /// response body.
    pub fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Value> {
        let url = self.url(path);
        trace!(%url, "POST");
        Self::read(self.client.post(&url).json(body).send()?)
    }

    /// `DELETE {base}/{path}`. An empty `path` targets the base URL itself
    /// (session root teardown).
    pub fn delete(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        trace!(%url, "DELETE");
        Self::read(self.client.delete(&url).send()?)
    }

    fn read(response: reqwest::blocking::Response) -> Result<Value> {
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(Error::Status {
                code: status.as_u16(),
                body,
            });
        }
        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}
