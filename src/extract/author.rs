// src/extract/author.rs
// =============================================================================
// This module extracts the author records from a parsed document.
//
// Same absence-tolerant rules as the course extractor, restricted to the
// instructors sub-tree. Two properties matter here:
// - An absent or wrong-shaped instructors node means zero authors, never
//   a failure
// - Positional integrity: an author we can't find a name for is still kept
//   in place (with an empty name), so the output list always lines up with
//   the source collection
// =============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::PathQuery;

// One course author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    /// Display name; empty when the source entry has none
    pub name: String,
    /// Public profile URL, when the source provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_link: Option<String>,
}

// Where the authors live in the document, and where each field lives
// inside one author entry
fn authors_path() -> PathQuery {
    PathQuery::new().key("visible_instructors")
}

fn name_path() -> PathQuery {
    PathQuery::new().key("display_name")
}

fn contact_path() -> PathQuery {
    PathQuery::new().key("url")
}

// Extracts zero or more author records from a parsed document
//
// Returns an empty Vec when the authors collection is absent or not a
// sequence. Never fails.
pub fn extract_authors(doc: &Value) -> Vec<AuthorRecord> {
    let entries = match authors_path().resolve(doc).and_then(Value::as_array) {
        Some(entries) => entries,
        None => return Vec::new(),
    };

    entries
        .iter()
        .map(|entry| AuthorRecord {
            name: name_path()
                .resolve(entry)
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string(),
            contact_link: contact_path()
                .resolve(entry)
                .and_then(Value::as_str)
                .map(str::to_string),
        })
        .collect()
}
