// src/document/mod.rs
// =============================================================================
// This module contains the document layer: parsing raw bodies into a
// document tree and navigating that tree with path queries.
//
// Submodules:
// - parser: Decodes a raw body (JSON or HTML-embedded JSON) into a document
// - path:   PathQuery, the key/index selector language used by extraction
//
// The document representation itself is serde_json::Value: a tree of maps
// (objects), sequences (arrays) and scalars (string/number/bool/null).
// Everything downstream borrows the tree; nothing mutates it.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod parser;
mod path;

// Re-export public items from submodules
// This lets users write `document::parse()` instead of
// `document::parser::parse()`
pub use parser::{parse, ParseError};
pub use path::{PathQuery, Step};
