//! In-page selector expressions.
//!
//! `focus`, `click`, and `submit` act through `execute/sync` with a script
//! that resolves the element inside the page, rather than through the
//! element-reference endpoints that `input`/`html`/`text` use. The locator
//! is embedded in a JS string literal, so quotes and backslashes in it must
//! be escaped; JSON-level escaping of the whole script is handled by serde
//! when the request body is serialized.

/// Escape a locator for embedding in a double-quoted JS string literal.
pub fn escape_js(locator: &str) -> String {
    locator.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Build a JS expression that evaluates to the element for a locator.
///
/// A leading `/` means XPath (resolved with `document.evaluate`, result
/// type 9 = FIRST_ORDERED_NODE_TYPE); anything else is a CSS selector.
pub fn selector_expression(locator: &str) -> String {
    let escaped = escape_js(locator);
    if locator.starts_with('/') {
        format!("document.evaluate(\"{escaped}\", document, null, 9, null).singleNodeValue")
    } else {
        format!("document.querySelector(\"{escaped}\")")
    }
}
