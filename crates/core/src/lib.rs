//! wd: a synchronous client for WebDriver browser automation
//!
//! This crate drives a WebDriver-protocol server (chromedriver) over plain
//! JSON-over-HTTP: create a session, navigate, find elements, click, type,
//! read text/HTML, and tear down. It can either launch the driver binary
//! itself or attach to a server already listening on a port.
//!
//! Every operation is one or two blocking HTTP round trips against the one
//! session and window the client captured at startup. There is no protocol
//! state machine beyond "session exists or not", no caching of element
//! references, and no retry logic.
//!
//! # Example
//!
//! ```ignore
//! use wd::{BrowserSession, SessionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = BrowserSession::start(
//!         SessionConfig::new().executable("/usr/bin/chromedriver"),
//!     )?;
//!
//!     session.location("https://example.com")?;
//!     session.input("#search", "webdriver")?;
//!     session.click("button[type=submit]")?;
//!     let heading = session.text("/html/body/h1")?;
//!     println!("{heading}");
//!
//!     session.stop()?;
//!     Ok(())
//! }
//! ```
//!
//! # Known limitations
//!
//! Requests block without a timeout unless [`SessionConfig::timeout`] is
//! set; a hung server hangs the caller. One instance owns exactly one
//! session and one window for its whole lifetime - there is no session or
//! window switching, and no concurrent use of a single instance.

pub mod config;
pub mod error;
pub mod http;
pub mod js;
pub mod session;

pub use config::{SessionConfig, DEFAULT_PORT};
pub use error::{Error, Result};
pub use session::BrowserSession;

// Wire types, re-exported for callers that assert on request shapes.
pub use wd_protocol as protocol;
