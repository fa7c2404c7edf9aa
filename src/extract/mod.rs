// src/extract/mod.rs
// =============================================================================
// This module contains the extraction layer and the pipeline glue.
//
// Submodules:
// - course: Assembles the CourseRecord from a parsed document
// - author: Extracts the author records from the instructors sub-tree
//
// This file also defines ScrapeError (the typed failure a single course can
// end in) and course_from_signal, the pure function that takes a classified
// fetch outcome all the way to a record. Keeping that glue pure means the
// whole pipeline minus the network is unit-testable.
// =============================================================================

mod author;
mod course;

// Re-export public items from submodules
pub use author::{extract_authors, AuthorRecord};
pub use course::{extract_course, CourseRecord, Price};

use thiserror::Error;

use crate::document;
use crate::fetch::Signal;

// Why one course failed to produce a record
//
// Field-level problems never show up here - those are absorbed into
// defaults inside the record. This enum only covers transport and parse
// failures, which stop the pipeline for that one course.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrapeError {
    #[error("network error (no response from the platform)")]
    Network,
    #[error("course not found (404)")]
    NotFound,
    #[error("rate limited by the platform (429)")]
    RateLimited,
    #[error("server error or unreliable response")]
    Server,
    #[error("could not parse response body: {reason}")]
    Parse { reason: String },
}

// Runs a classified fetch outcome through parsing and extraction
//
// Parameters:
//   signal: the classified transport outcome
//
// Returns: the course record, or the typed failure for this course
//
// This is pure glue: Ok(body) -> parse -> extract, everything else maps
// to its ScrapeError variant verbatim. No retries happen here.
pub fn course_from_signal(signal: Signal) -> Result<CourseRecord, ScrapeError> {
    match signal {
        Signal::Ok(body) => {
            let doc = document::parse(&body)
                .map_err(|e| ScrapeError::Parse { reason: e.reason })?;
            Ok(extract_course(&doc))
        }
        Signal::NotFound => Err(ScrapeError::NotFound),
        Signal::RateLimited => Err(ScrapeError::RateLimited),
        Signal::ServerError => Err(ScrapeError::Server),
        Signal::NetworkError => Err(ScrapeError::Network),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::classify;

    // The body a healthy fetch of a development course would return
    fn fixture_body() -> String {
        r#"{
            "primary_category": { "title": "Development" },
            "primary_subcategory": { "title": "Web Development" },
            "price": { "amount": 94.99, "currency": "USD", "is_free": false },
            "rating": 4.6,
            "enrollment": { "count": 2048 },
            "visible_instructors": [
                { "display_name": "Ada", "url": "https://example.com/ada" },
                { "display_name": "Grace", "url": "https://example.com/grace" }
            ]
        }"#
        .to_string()
    }

    #[test]
    fn test_end_to_end_success() {
        // status=200 with a good body all the way to a CourseRecord
        let signal = classify(Some(200), Some(fixture_body()), false);
        let record = course_from_signal(signal).unwrap();

        assert_eq!(record.category, "Development");
        assert_eq!(record.rating, Some(4.6));
        assert_eq!(record.authors.len(), 2);
        assert_eq!(record.authors[0].name, "Ada");
    }

    #[test]
    fn test_transport_failures_map_verbatim() {
        assert_eq!(
            course_from_signal(Signal::NotFound),
            Err(ScrapeError::NotFound)
        );
        assert_eq!(
            course_from_signal(Signal::RateLimited),
            Err(ScrapeError::RateLimited)
        );
        assert_eq!(
            course_from_signal(Signal::ServerError),
            Err(ScrapeError::Server)
        );
        assert_eq!(
            course_from_signal(Signal::NetworkError),
            Err(ScrapeError::Network)
        );
    }

    #[test]
    fn test_unparseable_body_is_a_parse_error() {
        let signal = classify(Some(200), Some("<<not a document>>".to_string()), false);
        let err = course_from_signal(signal).unwrap_err();
        assert_eq!(
            err,
            ScrapeError::Parse { reason: "no_recognizable_document".to_string() }
        );
    }

    #[test]
    fn test_embedded_body_also_reaches_a_record() {
        let body = format!(
            r#"<html><body><script type="application/json">{}</script></body></html>"#,
            fixture_body()
        );
        let signal = classify(Some(200), Some(body), false);
        let record = course_from_signal(signal).unwrap();
        assert_eq!(record.category, "Development");
    }
}
