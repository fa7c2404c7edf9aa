// src/fetch/url.rs
// =============================================================================
// This module builds the course listing URL from a course identifier.
//
// A course identifier is the path fragment that names a course on the
// platform, e.g. "course/learn-rust" or "/course/learn-rust/". We join it
// onto the platform base URL and validate the result, so the fetch layer
// only ever sees well-formed URLs.
//
// Rust concepts:
// - Pure functions: Same identifier in, same URL out, no side effects
// - The url crate: Parsing and validating URLs instead of trusting strings
// =============================================================================

use anyhow::{anyhow, Result};
use url::Url;

// The platform we fetch course listings from
const BASE_URL: &str = "https://www.udemy.com/";

// Builds the full course URL from a course identifier
//
// Parameters:
//   course_id: the course path fragment (leading slashes are tolerated)
//
// Returns: the validated absolute URL as a String
//
// Example:
//   "course/learn-rust" -> "https://www.udemy.com/course/learn-rust"
pub fn build_course_url(course_id: &str) -> Result<String> {
    let trimmed = course_id.trim().trim_start_matches('/');

    if trimmed.is_empty() {
        return Err(anyhow!("Empty course identifier"));
    }

    // Joining onto the parsed base both normalizes and validates the result
    let base = Url::parse(BASE_URL).expect("base URL is a valid constant");
    let full = base
        .join(trimmed)
        .map_err(|e| anyhow!("Invalid course identifier '{}': {}", course_id, e))?;

    Ok(full.to_string())
}
