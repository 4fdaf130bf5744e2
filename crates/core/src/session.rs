//! The browser session client.
//!
//! One `BrowserSession` owns one remote automation session and one window
//! handle for its entire lifetime. Every operation is one or two blocking
//! HTTP round trips; element references are re-resolved on each use, never
//! cached.

use serde_json::Value;
use tracing::debug;

use wd_protocol::{
    ElementLookup, ElementRef, NavigateRequest, NewSessionRequest, NewSessionResponse,
    ScriptRequest, SendKeysRequest, SwitchWindowRequest, ValueResponse,
};
use wd_runtime::DriverProcess;

use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::http::WireClient;
use crate::js::selector_expression;

/// A synchronous WebDriver session bound to one window.
///
/// Constructed with [`BrowserSession::start`]; valid until
/// [`BrowserSession::stop`]. The lifecycle is strictly
/// constructed -> operations -> stopped.
#[derive(Debug)]
pub struct BrowserSession {
    wire: WireClient,
    driver: Option<DriverProcess>,
    session_id: String,
    window_id: String,
}

impl BrowserSession {
    /// Create a session against a driver on `config.port`.
    ///
    /// When `config.executable` is set the driver binary is launched first
    /// (its readiness is enforced by the session-creation request simply
    /// blocking or failing until the port accepts connections); otherwise a
    /// server is assumed to already be listening.
    ///
    /// The startup sequence is: `POST /session` negotiating capabilities,
    /// rebase to `/session/{id}`, `GET window` to capture the window
    /// handle, then [`activate`](Self::activate) that window.
    pub fn start(config: SessionConfig) -> Result<Self> {
        let driver = match &config.executable {
            Some(executable) => Some(DriverProcess::launch(
                executable,
                config.port,
                &config.log_dir,
            )?),
            None => None,
        };

        let base_url = config.base_url();
        let mut wire = WireClient::new(&base_url, config.timeout)?;

        let response: NewSessionResponse = serde_json::from_value(
            wire.post("session", &NewSessionRequest::new(&config.browser_name))?,
        )?;
        let session_id = response
            .session_id
            .ok_or(Error::MissingField("sessionId"))?;
        debug!(%session_id, "session created");

        wire.rebase(format!("{base_url}/session/{session_id}"));

        let window: ValueResponse<String> = serde_json::from_value(wire.get("window")?)?;
        let window_id = window.value;
        debug!(%window_id, "window captured");

        let session = Self {
            wire,
            driver,
            session_id,
            window_id,
        };
        session.activate()?;
        Ok(session)
    }

    /// Server-issued session identifier.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Window handle captured at startup.
    pub fn window_id(&self) -> &str {
        &self.window_id
    }

    /// Navigate the current window to `url`.
    pub fn location(&self, url: impl Into<String>) -> Result<()> {
        self.wire
            .post("url", &NavigateRequest { url: url.into() })?;
        Ok(())
    }

    /// Current URL of the window.
    pub fn get_location(&self) -> Result<String> {
        let response: ValueResponse<String> = serde_json::from_value(self.wire.get("url")?)?;
        Ok(response.value)
    }

    /// Re-assert the session's window as foregrounded.
    ///
    /// Always sends the window handle captured at startup.
    pub fn activate(&self) -> Result<()> {
        self.wire.post(
            "window",
            &SwitchWindowRequest {
                handle: self.window_id.clone(),
            },
        )?;
        Ok(())
    }

    /// Run a JS expression in the page, returning its `$.value` result.
    pub fn eval(&self, expression: &str) -> Result<Value> {
        let response = self
            .wire
            .post("execute/sync", &ScriptRequest::new(expression))?;
        Ok(response.get("value").cloned().unwrap_or(Value::Null))
    }

    /// Focus the element matching `locator`, in-page.
    pub fn focus(&self, locator: &str) -> Result<()> {
        self.eval(&format!("{}.focus()", selector_expression(locator)))?;
        Ok(())
    }

    /// Click the element matching `locator`, in-page.
    pub fn click(&self, locator: &str) -> Result<()> {
        self.eval(&format!("{}.click()", selector_expression(locator)))?;
        Ok(())
    }

    /// Submit is an alias for [`click`](Self::click): both issue the
    /// identical request for the same locator.
    pub fn submit(&self, locator: &str) -> Result<()> {
        self.click(locator)
    }

    /// Type `value` into the element matching `locator`.
    pub fn input(&self, locator: &str, value: impl Into<String>) -> Result<()> {
        let id = self.element_id(locator)?;
        self.wire.post(
            &format!("element/{id}/value"),
            &SendKeysRequest::new(value),
        )?;
        Ok(())
    }

    /// Inner HTML of the element matching `locator`.
    pub fn html(&self, locator: &str) -> Result<String> {
        let id = self.element_id(locator)?;
        let response: ValueResponse<String> = serde_json::from_value(
            self.wire.get(&format!("element/{id}/attribute/innerHTML"))?,
        )?;
        Ok(response.value)
    }

    /// Visible text of the element matching `locator`.
    pub fn text(&self, locator: &str) -> Result<String> {
        let id = self.element_id(locator)?;
        let response: ValueResponse<String> =
            serde_json::from_value(self.wire.get(&format!("element/{id}/text"))?)?;
        Ok(response.value)
    }

    /// Close the current window only.
    pub fn close(&self) -> Result<()> {
        self.wire.delete("window")?;
        Ok(())
    }

    /// Full teardown: delete the session, then release the driver process
    /// if this client launched one.
    ///
    /// The process is stopped even when the session `DELETE` fails; the
    /// `DELETE` result is returned either way. Never signals a process when
    /// none was launched.
    pub fn stop(mut self) -> Result<()> {
        let result = self.wire.delete("");
        if let Some(driver) = self.driver.as_mut() {
            driver.stop();
        }
        result.map(|_| ())
    }

    /// Resolve a locator to a server-issued element id.
    ///
    /// Leading `/` selects the xpath strategy, anything else the
    /// css-selector strategy. No caching: callers re-resolve on every use.
    fn element_id(&self, locator: &str) -> Result<String> {
        let lookup = ElementLookup::from_locator(locator);
        debug!(using = lookup.using.as_str(), value = %lookup.value, "element lookup");
        let response: ValueResponse<ElementRef> =
            serde_json::from_value(self.wire.post("element", &lookup)?)?;
        response
            .value
            .element
            .ok_or_else(|| Error::ElementNotFound(locator.to_string()))
    }
}
