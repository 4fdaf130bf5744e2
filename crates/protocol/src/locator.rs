//! Locator strategies for element lookup.

use serde::{Deserialize, Serialize};

/// Element lookup strategy, as sent in the `using` field of `POST element`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocatorStrategy {
    /// XPath expression
    #[serde(rename = "xpath")]
    XPath,
    /// CSS selector
    #[serde(rename = "css selector")]
    CssSelector,
}

impl LocatorStrategy {
    /// Classify a locator string: a leading `/` means XPath, anything else
    /// is treated as a CSS selector.
    pub fn classify(locator: &str) -> Self {
        if locator.starts_with('/') {
            LocatorStrategy::XPath
        } else {
            LocatorStrategy::CssSelector
        }
    }

    /// The strategy name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            LocatorStrategy::XPath => "xpath",
            LocatorStrategy::CssSelector => "css selector",
        }
    }
}

/// Body for `POST element`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementLookup {
    /// Lookup strategy
    pub using: LocatorStrategy,
    /// The locator itself (XPath expression or CSS selector)
    pub value: String,
}

impl ElementLookup {
    /// Build a lookup request, classifying the locator by its leading
    /// character.
    pub fn from_locator(locator: impl Into<String>) -> Self {
        let value = locator.into();
        Self {
            using: LocatorStrategy::classify(&value),
            value,
        }
    }
}
