//! Wire types for the WebDriver JSON protocol.
//!
//! This crate contains the serde-serializable types exchanged with a
//! WebDriver-style automation server (chromedriver) over HTTP. These types
//! represent the "protocol layer" - the shapes of data as they appear on
//! the wire.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! - **Pure data**: No behavior beyond serialization/deserialization
//! - **1:1 with protocol**: Match the legacy JSON wire protocol that
//!   chromedriver speaks (`sessionId` at the top level, `value` envelopes,
//!   `ELEMENT` references)
//! - **Stable**: Changes only when the wire protocol changes
//!
//! The ergonomic client API is built on top of these types in `wd-rs`.

pub mod capabilities;
pub mod command;
pub mod locator;
pub mod response;

pub use capabilities::*;
pub use command::*;
pub use locator::*;
pub use response::*;
