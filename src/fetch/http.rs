// src/fetch/http.rs
// =============================================================================
// This module fetches a course page and classifies the raw outcome.
//
// Key functionality:
// - Makes an HTTP GET request for the course listing page
// - Classifies the outcome into one of five signals the pipeline reacts to
// - Never retries: back-off policy belongs to the caller, not here
//
// The classifier itself is a pure function over (status, body, transport
// error), so it is trivially testable without any network involved.
//
// Rust concepts:
// - async/await: For the network request
// - Enums with data: Only the success variant carries the body
// - Pattern matching with guards: Status code triage
// =============================================================================

use reqwest::Client;
use std::time::Duration;

use crate::fetch::url::build_course_url;

// Classification of a raw transport outcome
//
// Exactly one variant holds data (the body); the rest are empty markers.
// Ok is only produced for a 2xx status with a readable, non-empty body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// 2xx response with a readable body
    Ok(String),
    /// 404 - the course does not exist
    NotFound,
    /// 429 - the platform is throttling us
    RateLimited,
    /// 5xx, or any response we don't trust (empty body, odd status)
    ServerError,
    /// The request never produced a response (DNS, timeout, TLS, refused)
    NetworkError,
}

// Classifies a raw transport outcome into a Signal
//
// Parameters:
//   status: the HTTP status code, if a response arrived
//   body: the response body, if one could be read
//   transport_error: whether the request failed before producing a response
//
// Rules, in priority order:
// 1. Transport failure -> NetworkError (status and body are ignored)
// 2. 404 -> NotFound
// 3. 429 -> RateLimited
// 4. 500 and up -> ServerError
// 5. 2xx with a non-empty body -> Ok(body)
// 6. Anything else -> ServerError (an unreliable response is not a success)
//
// This function is total: every input combination maps to exactly one Signal.
pub fn classify(status: Option<u16>, body: Option<String>, transport_error: bool) -> Signal {
    if transport_error {
        return Signal::NetworkError;
    }

    match status {
        Some(404) => Signal::NotFound,
        Some(429) => Signal::RateLimited,
        Some(code) if code >= 500 => Signal::ServerError,
        Some(code) if (200..300).contains(&code) => {
            // A 2xx with no readable body (or an empty one) is untrusted:
            // the page we wanted is simply not there
            match body {
                Some(text) if !text.is_empty() => Signal::Ok(text),
                _ => Signal::ServerError,
            }
        }
        // 3xx that wasn't followed, 4xx we don't special-case, or no status
        _ => Signal::ServerError,
    }
}

// Fetches one course page and returns the classified outcome
//
// Parameters:
//   client: reqwest HTTP client (shared, connection pooling)
//   course_id: the course path fragment
//
// Returns: a Signal - this function never returns a Result because every
// outcome, including total transport failure, has a classification.
pub async fn fetch_course(client: &Client, course_id: &str) -> Signal {
    let url = match build_course_url(course_id) {
        Ok(url) => url,
        // A malformed identifier can never produce a response
        Err(_) => return Signal::NetworkError,
    };

    match client.get(&url).send().await {
        Ok(response) => {
            let status = response.status().as_u16();

            // Reading the body can fail mid-stream even after a good status
            match response.text().await {
                Ok(body) => classify(Some(status), Some(body), false),
                Err(_) => classify(Some(status), None, false),
            }
        }
        Err(_) => classify(None, None, true),
    }
}

// Builds the HTTP client the whole run shares
//
// One client means one connection pool; cloning it later is cheap.
pub fn build_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(10))  // 10 second timeout per request
        .redirect(reqwest::redirect::Policy::limited(5))  // Follow up to 5 redirects
        .user_agent(concat!("course-scout/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
}
