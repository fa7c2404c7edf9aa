// src/extract/course.rs
// =============================================================================
// This module assembles a CourseRecord from a parsed document.
//
// Design: instead of one hand-written traversal per field, every field is a
// rule: a PathQuery (where the value lives) plus a coercion (what to turn it
// into) plus a default (what to use when it isn't there). The path catalog
// lives in the `paths` submodule; a handful of generic coercion helpers do
// the rest.
//
// The single most important property here: a missing or malformed field
// NEVER aborts extraction. The source site's schema is not contractually
// stable, so partial data always beats total failure. A coercion failure
// (wrong type at the path) is handled identically to absence.
//
// Rust concepts:
// - Option combinators: and_then / map / unwrap_or for default handling
// - Enums with struct variants: The Price type
// - serde derive: Records serialize straight to JSON for output
// =============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::PathQuery;
use crate::extract::author::{extract_authors, AuthorRecord};

// What the course costs
//
// Free wins over a present amount when both are signaled; Unknown means
// the document gave us nothing usable either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Price {
    /// The course is explicitly marked free
    Free,
    /// A numeric amount plus a currency code
    Paid { amount: f64, currency: String },
    /// Neither an amount nor a free flag could be resolved
    Unknown,
}

// The structured record for one course
//
// Field defaults (applied on absence or malformed data):
// - category / subcategory: empty string
// - price: Unknown
// - rating / average_rating: None, clamped to [0.0, 5.0] when present
// - enrolled: None
// - topic: None
// - authors: empty list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub category: String,
    pub subcategory: String,
    pub price: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrolled: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub authors: Vec<AuthorRecord>,
}

// The field path catalog: one PathQuery per course field.
//
// This is the declarative heart of the extractor - changing where a field
// lives in the source document means changing exactly one line here.
mod paths {
    use crate::document::PathQuery;

    pub fn category() -> PathQuery {
        PathQuery::new().key("primary_category").key("title")
    }

    pub fn subcategory() -> PathQuery {
        PathQuery::new().key("primary_subcategory").key("title")
    }

    pub fn price_amount() -> PathQuery {
        PathQuery::new().key("price").key("amount")
    }

    pub fn price_currency() -> PathQuery {
        PathQuery::new().key("price").key("currency")
    }

    pub fn price_is_free() -> PathQuery {
        PathQuery::new().key("price").key("is_free")
    }

    pub fn rating() -> PathQuery {
        PathQuery::new().key("rating")
    }

    pub fn ratings_collection() -> PathQuery {
        PathQuery::new().key("ratings")
    }

    pub fn enrolled() -> PathQuery {
        PathQuery::new().key("enrollment").key("count")
    }

    pub fn topic() -> PathQuery {
        PathQuery::new().key("topic")
    }
}

// Extracts the full course record from a parsed document
//
// Always returns a record: absent or malformed fields fall back to their
// documented defaults instead of failing.
pub fn extract_course(doc: &Value) -> CourseRecord {
    CourseRecord {
        category: string_at(doc, &paths::category()).unwrap_or_default(),
        subcategory: string_at(doc, &paths::subcategory()).unwrap_or_default(),
        price: extract_price(doc),
        rating: f64_at(doc, &paths::rating()).map(clamp_rating),
        average_rating: average_rating(doc),
        enrolled: count_at(doc, &paths::enrolled()),
        topic: string_at(doc, &paths::topic()),
        authors: extract_authors(doc),
    }
}

// --- Coercion helpers -------------------------------------------------------
// Each helper resolves a path and coerces the node to one target type.
// A node of the wrong type is treated exactly like an absent node.

// Resolves a path to an owned String, or None
fn string_at(doc: &Value, path: &PathQuery) -> Option<String> {
    path.resolve(doc)?.as_str().map(str::to_string)
}

// Resolves a path to a float, or None
fn f64_at(doc: &Value, path: &PathQuery) -> Option<f64> {
    path.resolve(doc)?.as_f64()
}

// Resolves a path to a non-negative count, or None
//
// The source sometimes serves counts as display strings ("12,345 students"),
// so a string node is parsed leniently: leading digits with thousands
// separators, anything after them ignored.
fn count_at(doc: &Value, path: &PathQuery) -> Option<u64> {
    match path.resolve(doc)? {
        Value::Number(n) => n.as_u64(),  // as_u64 is None for negatives/floats
        Value::String(s) => parse_count_string(s),
        _ => None,
    }
}

// Parses "12,345 students" style strings into 12345
fn parse_count_string(s: &str) -> Option<u64> {
    let digits: String = s
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(char::is_ascii_digit)
        .collect();

    if digits.is_empty() {
        return None;
    }

    digits.parse().ok()
}

// Clamps a rating into its valid domain
fn clamp_rating(value: f64) -> f64 {
    value.clamp(0.0, 5.0)
}

// --- Composite fields -------------------------------------------------------

// Resolves the price sub-structure
//
// Precedence: an explicit free flag beats a present amount. Currency
// defaults to USD when an amount resolves without one.
fn extract_price(doc: &Value) -> Price {
    let is_free = paths::price_is_free()
        .resolve(doc)
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if is_free {
        return Price::Free;
    }

    match f64_at(doc, &paths::price_amount()) {
        Some(amount) => Price::Paid {
            amount,
            currency: string_at(doc, &paths::price_currency())
                .unwrap_or_else(|| "USD".to_string()),
        },
        None => Price::Unknown,
    }
}

// Computes the mean over the nested ratings collection
//
// Each element contributes either its own numeric value or its "rating"
// key, covering both the flat and the per-entry shapes the site serves.
// Every contribution is clamped to the rating domain first, so the mean
// lives in [0.0, 5.0] just like the rating field itself.
// Returns None when the collection is absent, not a sequence, or contains
// no numeric ratings.
fn average_rating(doc: &Value) -> Option<f64> {
    let entries = paths::ratings_collection().resolve(doc)?.as_array()?;

    let found: Vec<f64> = entries
        .iter()
        .filter_map(|entry| match entry {
            Value::Number(n) => n.as_f64(),
            other => other.get("rating").and_then(Value::as_f64),
        })
        .map(clamp_rating)
        .collect();

    if found.is_empty() {
        return None;
    }

    Some(found.iter().sum::<f64>() / found.len() as f64)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is and_then?
//    - Chains Option-returning operations: Some flows through, None stops
//    - resolve(...).and_then(Value::as_bool) reads as "resolve, then
//      coerce, and give me None if either part fails"
//
// 2. Why unwrap_or_default / unwrap_or_else?
//    - They turn an Option into a concrete value with a fallback
//    - unwrap_or_default uses the type's Default (empty String here)
//    - unwrap_or_else takes a closure, so the fallback is only built
//      when it's actually needed
//
// 3. What is filter_map?
//    - map + filter in one pass: the closure returns Option, and only
//      Some values survive
//    - Perfect for "collect the numeric entries, skip the junk"
//
// 4. Why a paths submodule instead of constants?
//    - PathQuery owns heap-allocated steps, so it can't be a const
//    - Small functions keep the catalog declarative and in one place
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // A document where every extraction path is present with valid types
    fn full_fixture() -> Value {
        json!({
            "primary_category": { "title": "Development" },
            "primary_subcategory": { "title": "Systems Programming" },
            "price": { "amount": 49.99, "currency": "EUR", "is_free": false },
            "rating": 4.6,
            "ratings": [
                { "rating": 4.0 },
                { "rating": 5.0 }
            ],
            "enrollment": { "count": 12345 },
            "topic": "Rust",
            "visible_instructors": [
                { "display_name": "Ada", "url": "https://example.com/ada" },
                { "display_name": "Grace", "url": "https://example.com/grace" }
            ]
        })
    }

    #[test]
    fn test_full_fixture_round_trip() {
        // Identity property: every injected value comes back out exactly
        let record = extract_course(&full_fixture());

        assert_eq!(record.category, "Development");
        assert_eq!(record.subcategory, "Systems Programming");
        assert_eq!(
            record.price,
            Price::Paid { amount: 49.99, currency: "EUR".to_string() }
        );
        assert_eq!(record.rating, Some(4.6));
        assert_eq!(record.average_rating, Some(4.5));
        assert_eq!(record.enrolled, Some(12345));
        assert_eq!(record.topic, Some("Rust".to_string()));
        assert_eq!(record.authors.len(), 2);
    }

    #[test]
    fn test_empty_document_yields_all_defaults() {
        let record = extract_course(&json!({}));

        assert_eq!(record.category, "");
        assert_eq!(record.subcategory, "");
        assert_eq!(record.price, Price::Unknown);
        assert_eq!(record.rating, None);
        assert_eq!(record.average_rating, None);
        assert_eq!(record.enrolled, None);
        assert_eq!(record.topic, None);
        assert!(record.authors.is_empty());
    }

    #[test]
    fn test_partial_document_keeps_what_it_has() {
        // Deleting keys from the full fixture never fails extraction;
        // the omitted fields simply fall back to their defaults
        let mut doc = full_fixture();
        let map = doc.as_object_mut().unwrap();
        map.remove("price");
        map.remove("rating");
        map.remove("visible_instructors");

        let record = extract_course(&doc);

        assert_eq!(record.category, "Development");
        assert_eq!(record.price, Price::Unknown);
        assert_eq!(record.rating, None);
        assert!(record.authors.is_empty());
        assert_eq!(record.enrolled, Some(12345));
    }

    #[test]
    fn test_malformed_fields_fall_back_like_absent_ones() {
        // Wrong types everywhere, yet extraction still succeeds
        let doc = json!({
            "primary_category": "not a map",
            "price": { "amount": "forty-nine" },
            "rating": "excellent",
            "enrollment": { "count": -3 },
            "topic": 17
        });

        let record = extract_course(&doc);

        assert_eq!(record.category, "");
        assert_eq!(record.price, Price::Unknown);
        assert_eq!(record.rating, None);
        assert_eq!(record.enrolled, None);
        assert_eq!(record.topic, None);
    }

    #[test]
    fn test_rating_is_clamped_high() {
        let doc = json!({ "rating": 7.5 });
        assert_eq!(extract_course(&doc).rating, Some(5.0));
    }

    #[test]
    fn test_rating_is_clamped_low() {
        let doc = json!({ "rating": -1 });
        assert_eq!(extract_course(&doc).rating, Some(0.0));
    }

    #[test]
    fn test_free_flag_beats_amount() {
        let doc = json!({
            "price": { "amount": 49.99, "currency": "USD", "is_free": true }
        });
        assert_eq!(extract_course(&doc).price, Price::Free);
    }

    #[test]
    fn test_missing_currency_defaults_to_usd() {
        let doc = json!({ "price": { "amount": 19.99 } });
        assert_eq!(
            extract_course(&doc).price,
            Price::Paid { amount: 19.99, currency: "USD".to_string() }
        );
    }

    #[test]
    fn test_enrolled_accepts_display_strings() {
        let doc = json!({ "enrollment": { "count": "12,345 students" } });
        assert_eq!(extract_course(&doc).enrolled, Some(12345));
    }

    #[test]
    fn test_enrolled_rejects_non_numeric_strings() {
        let doc = json!({ "enrollment": { "count": "lots" } });
        assert_eq!(extract_course(&doc).enrolled, None);
    }

    #[test]
    fn test_average_rating_accepts_bare_numbers() {
        let doc = json!({ "ratings": [4.0, 4.5, 5.0] });
        assert_eq!(extract_course(&doc).average_rating, Some(4.5));
    }

    #[test]
    fn test_average_rating_skips_junk_entries() {
        let doc = json!({ "ratings": [{ "rating": 3.0 }, "n/a", { "other": 1 }] });
        assert_eq!(extract_course(&doc).average_rating, Some(3.0));
    }

    #[test]
    fn test_average_rating_is_clamped_high() {
        // Out-of-range entries are clamped before averaging, so the mean
        // stays inside the rating domain like the rating field does
        let doc = json!({ "ratings": [7.5, 8.5] });
        assert_eq!(extract_course(&doc).average_rating, Some(5.0));
    }

    #[test]
    fn test_average_rating_is_clamped_low() {
        // -1 clamps to 0.0, so the mean of [-1, 3.0] is 1.5
        let doc = json!({ "ratings": [{ "rating": -1.0 }, { "rating": 3.0 }] });
        assert_eq!(extract_course(&doc).average_rating, Some(1.5));
    }

    #[test]
    fn test_average_rating_none_when_nothing_numeric() {
        let doc = json!({ "ratings": ["n/a", {}] });
        assert_eq!(extract_course(&doc).average_rating, None);

        let doc = json!({ "ratings": "4.5" });
        assert_eq!(extract_course(&doc).average_rating, None);
    }
}
