// src/fetch/mod.rs
// =============================================================================
// This module contains the transport-facing layer.
//
// Submodules:
// - url:  Builds the course listing URL from a course identifier
// - http: Fetches the page and classifies the raw outcome into a Signal
//
// Everything above this layer works with Signals, never with raw reqwest
// responses.
// =============================================================================

mod http;
mod url;

// Re-export public items from submodules
pub use http::{build_client, classify, fetch_course, Signal};
pub use url::build_course_url;
