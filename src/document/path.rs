// src/document/path.rs
// =============================================================================
// This module implements PathQuery: a tiny selector language for navigating
// parsed documents (serde_json::Value trees).
//
// A PathQuery is an ordered list of steps. Each step is either:
// - Key("name"):  descend into a map by key
// - Index(3):     descend into a sequence by position
//
// Resolution walks the steps in order. If any step doesn't apply (missing
// key, index out of range, or the wrong kind of node entirely), the whole
// resolution is "absent" - represented as None. It never panics and never
// distinguishes "missing" from "wrong shape": extraction rules downstream
// should not care which one happened.
//
// Rust concepts:
// - Enums: To represent the two kinds of steps
// - Option<&T>: Borrowed "maybe" results with no allocation
// - Iterators with fold-style loops: Walking the steps
// =============================================================================

use serde_json::Value;

// One navigation step inside a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Look up a key in a map (JSON object)
    Key(String),
    /// Look up a position in a sequence (JSON array)
    Index(usize),
}

// An ordered sequence of steps applied from the document root
//
// Build one with the fluent methods:
//   PathQuery::new().key("price").key("amount")
//   PathQuery::new().key("visible_instructors").index(0).key("url")
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathQuery {
    steps: Vec<Step>,
}

impl PathQuery {
    /// Creates an empty path (resolves to the document root itself)
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a map-key lookup step
    pub fn key(mut self, name: &str) -> Self {
        self.steps.push(Step::Key(name.to_string()));
        self
    }

    /// Appends a sequence-index lookup step
    pub fn index(mut self, i: usize) -> Self {
        self.steps.push(Step::Index(i));
        self
    }

    // Resolves this path against a document
    //
    // Returns: Some(&Value) if every step applied, None (absent) otherwise
    //
    // This is a pure function: the same (doc, path) pair always produces
    // the same result, and nothing is mutated or allocated along the way.
    pub fn resolve<'a>(&self, doc: &'a Value) -> Option<&'a Value> {
        let mut current = doc;

        for step in &self.steps {
            current = match step {
                // Value::get() on a non-object returns None, which is
                // exactly the "wrong shape == absent" behavior we want
                Step::Key(name) => current.get(name.as_str())?,
                Step::Index(i) => current.get(*i)?,
            };
        }

        Some(current)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<&Value> instead of a custom Absent type?
//    - Option is Rust's built-in "maybe" type
//    - None already means exactly what we want: nothing was found
//    - Borrowing (&Value) means resolution never copies the document
//
// 2. What does the ? operator do on Option?
//    - If the Option is Some(value), extracts value
//    - If it's None, returns None from the whole function immediately
//    - That's how a failed step aborts the walk with no explicit branching
//
// 3. What are the lifetime annotations ('a) on resolve?
//    - They tell the compiler the returned reference borrows from `doc`,
//      not from `self`
//    - Without them, the compiler would tie the result to the path's
//      lifetime, which is stricter than necessary
//
// 4. Why take &str in key() but store String?
//    - Callers usually have string literals; &str is the flexible input
//    - The path owns its steps, so it stores an owned String
// -----------------------------------------------------------------------------
