// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Run the fetch -> classify -> parse -> extract pipeline per course
// 4. Print the records and exit with a proper code
//    (0 = all courses extracted, 1 = some courses failed, 2 = error)
//
// Rust concepts used:
// - async/await: Because we make network requests (many, for batch mode)
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;       // src/cli.rs - command-line parsing
mod document;  // src/document/ - body parsing and path queries
mod extract;   // src/extract/ - course and author extraction
mod fetch;     // src/fetch/ - URL building, HTTP fetch, signal classification

// Import items we need from our modules
use clap::Parser;  // Parser trait enables the parse() method
use cli::{Cli, Commands};
use extract::{course_from_signal, CourseRecord, Price, ScrapeError};
use futures::stream::{self, StreamExt};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{Context, Result};

// The outcome for one course in a run: its identifier plus either the
// extracted record or the typed failure
struct CourseOutcome {
    course_id: String,
    result: std::result::Result<CourseRecord, ScrapeError>,
}

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = every course produced a record
//   Ok(1) = at least one course failed
//   Err   = unexpected internal error (becomes exit code 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used
    match cli.command {
        Commands::Fetch { course_id, json } => handle_fetch(&course_id, json).await,
        Commands::Batch { file, json, concurrency } => {
            handle_batch(&file, json, concurrency).await
        }
    }
}

// Handles the 'fetch' subcommand: one course, one record
async fn handle_fetch(course_id: &str, json: bool) -> Result<i32> {
    if !json {
        println!("🔍 Fetching course: {}", course_id);
    }

    let client = fetch::build_client();
    let outcomes = vec![scrape_one(&client, course_id.to_string()).await];

    print_results(&outcomes, json)?;

    Ok(exit_code(&outcomes))
}

// Handles the 'batch' subcommand: many courses, fetched concurrently
async fn handle_batch(file: &str, json: bool, concurrency: usize) -> Result<i32> {
    // Read the identifier list up front; blank lines and comments are skipped
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Could not read course list '{}'", file))?;

    let course_ids: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    if course_ids.is_empty() {
        if json {
            // Keep stdout machine-readable: the empty result is the output
            println!("[]");
        } else {
            println!("⚠️  No course identifiers found in {}", file);
        }
        return Ok(0);
    }

    if !json {
        println!("🔍 Fetching {} course(s), {} at a time...\n", course_ids.len(), concurrency);
    }

    // One shared client for connection pooling; cloning it per task is cheap
    let client = fetch::build_client();

    // Create a stream of futures, one per course, and run up to
    // `concurrency` of them at once. buffer_unordered returns results
    // as they complete, which is fine - each outcome carries its own id.
    let futures = course_ids.into_iter().map(|course_id| {
        let client = client.clone();
        async move { scrape_one(&client, course_id).await }
    });

    let outcomes: Vec<CourseOutcome> = stream::iter(futures)
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    print_results(&outcomes, json)?;

    Ok(exit_code(&outcomes))
}

// Runs the full pipeline for one course
//
// fetch (network) -> classify -> parse -> extract, ending in either a
// record or a typed failure. Nothing here retries: a RateLimited outcome
// is reported as-is so the user can rerun with lower concurrency.
async fn scrape_one(client: &reqwest::Client, course_id: String) -> CourseOutcome {
    let signal = fetch::fetch_course(client, &course_id).await;
    let result = course_from_signal(signal);

    CourseOutcome { course_id, result }
}

// Decides the process exit code from the collected outcomes
fn exit_code(outcomes: &[CourseOutcome]) -> i32 {
    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failed > 0 {
        1
    } else {
        0
    }
}

// Prints the outcomes either as a table or as JSON
fn print_results(outcomes: &[CourseOutcome], json: bool) -> Result<()> {
    if json {
        // Serialize outcomes to JSON and print
        // Records serialize as-is; failures become { "error": "..." }
        let values: Vec<serde_json::Value> = outcomes
            .iter()
            .map(|o| match &o.result {
                Ok(record) => serde_json::json!({
                    "course_id": o.course_id,
                    "course": record,
                }),
                Err(e) => serde_json::json!({
                    "course_id": o.course_id,
                    "error": e.to_string(),
                }),
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        // Print human-readable table
        print_table(outcomes);
    }
    Ok(())
}

// Prints outcomes as a human-readable table in the terminal
fn print_table(outcomes: &[CourseOutcome]) {
    // Print table header
    println!(
        "{:<36} {:<20} {:<14} {:<8} {:<10} {:<8}",
        "COURSE", "CATEGORY", "PRICE", "RATING", "ENROLLED", "AUTHORS"
    );
    println!("{}", "=".repeat(100));

    for outcome in outcomes {
        // Truncate the identifier if too long for display
        let id_display = truncate_id(&outcome.course_id);

        match &outcome.result {
            Ok(record) => {
                println!(
                    "{:<36} {:<20} {:<14} {:<8} {:<10} {:<8}",
                    id_display,
                    record.category,
                    format_price(&record.price),
                    record
                        .rating
                        .map(|r| format!("{:.1}", r))
                        .unwrap_or_else(|| "-".to_string()),
                    record
                        .enrolled
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    record.authors.len(),
                );
            }
            Err(e) => {
                println!("{:<36} ❌ {}", id_display, e);
            }
        }
    }

    println!();

    // Print summary
    let ok_count = outcomes.iter().filter(|o| o.result.is_ok()).count();
    let failed_count = outcomes.len() - ok_count;

    println!("📊 Summary:");
    println!("   ✅ Extracted: {}", ok_count);
    println!("   ❌ Failed: {}", failed_count);
    println!("   📋 Total: {}", outcomes.len());
}

// Truncates a course identifier for table display
//
// Counts characters, not bytes: course slugs can contain multi-byte
// UTF-8, and slicing by byte index would panic mid-character.
fn truncate_id(course_id: &str) -> String {
    const MAX_CHARS: usize = 33;

    if course_id.chars().count() > MAX_CHARS {
        let head: String = course_id.chars().take(MAX_CHARS).collect();
        format!("{}...", head)
    } else {
        course_id.to_string()
    }
}

// Formats the price enum as a short display string
fn format_price(price: &Price) -> String {
    match price {
        Price::Free => "Free".to_string(),
        Price::Paid { amount, currency } => format!("{:.2} {}", amount, currency),
        Price::Unknown => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id_is_unchanged() {
        assert_eq!(truncate_id("course/learn-rust"), "course/learn-rust");
    }

    #[test]
    fn test_long_id_is_truncated() {
        let long = "course/".repeat(10);
        let display = truncate_id(&long);
        assert_eq!(display.chars().count(), 36);  // 33 chars + "..."
        assert!(display.ends_with("..."));
    }

    #[test]
    fn test_multibyte_id_does_not_panic() {
        // 40 two-byte characters: byte index 33 would land mid-character,
        // so truncation must count chars, not bytes
        let long = "é".repeat(40);
        let display = truncate_id(&long);
        assert!(display.starts_with(&"é".repeat(33)));
        assert!(display.ends_with("..."));
    }
}
