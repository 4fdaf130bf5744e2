//! WebDriver Runtime - driver process lifecycle
//!
//! This crate owns the optional chromedriver child process: launching the
//! executable bound to a TCP port with its output captured to a log file,
//! and terminating it on teardown.
//!
//! The client in `wd-rs` uses this when a session is started with an
//! `executable` configured; when connecting to an already-running server no
//! process is spawned and this crate is not involved.

pub mod driver;
pub mod error;

pub use driver::DriverProcess;
pub use error::{Error, Result};
