// src/document/parser.rs
// =============================================================================
// This module turns a raw response body into a parsed document
// (serde_json::Value).
//
// Course landing pages come back in one of two shapes:
// 1. A direct JSON response (when the site serves the data endpoint)
// 2. An HTML page with the course data embedded inside a
//    <script type="application/json"> block
//
// We try them in that fixed order. If neither works, we return a ParseError
// with a stable reason string so callers can report it.
//
// Important: the body is treated as pure data. We never evaluate anything
// found inside it - scripts are only ever read as text.
//
// Rust concepts:
// - thiserror: Derive macro for typed, displayable errors
// - Fallback chains: Trying parsers in order with early returns
// =============================================================================

use scraper::{Html, Selector};
use serde_json::Value;
use thiserror::Error;

// The body could not be interpreted as a recognizable document
//
// The reason string is stable and machine-checkable, e.g.
// "no_recognizable_document"
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error: {reason}")]
pub struct ParseError {
    pub reason: String,
}

// Parses a raw body into a document
//
// Parameters:
//   body: the raw response body (JSON or HTML)
//
// Returns: Ok(Value) on success, Err(ParseError) if no sub-parser recognized
// the body
pub fn parse(body: &str) -> Result<Value, ParseError> {
    // Sub-parser (a): direct structured response
    if let Ok(doc) = serde_json::from_str::<Value>(body) {
        return Ok(doc);
    }

    // Sub-parser (b): embedded data block inside an HTML page
    if let Some(doc) = parse_embedded(body) {
        return Ok(doc);
    }

    Err(ParseError {
        reason: "no_recognizable_document".to_string(),
    })
}

// Scans an HTML page for embedded JSON data blocks
//
// We parse the page with scraper and select every
// <script type="application/json"> element in document order.
// The first block whose text decodes as JSON wins.
//
// Returns: Some(Value) if a block decoded, None otherwise
fn parse_embedded(html: &str) -> Option<Value> {
    let document = Html::parse_document(html);

    // Our selector is a constant and known to be valid, so unwrap is fine here
    let selector = Selector::parse(r#"script[type="application/json"]"#).unwrap();

    for element in document.select(&selector) {
        // Join the text nodes inside the script tag into one string
        let raw: String = element.text().collect();

        if let Ok(doc) = serde_json::from_str::<Value>(raw.trim()) {
            return Some(doc);
        }
    }

    None
}
