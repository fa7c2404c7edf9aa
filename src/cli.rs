// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "course-scout",
    version = "0.1.0",
    about = "A CLI tool to fetch course listing pages and extract structured course data",
    long_about = "course-scout fetches public course listing pages from an online learning \
                  platform and extracts a structured record per course: category, price, \
                  rating, enrollment and authors. Missing fields fall back to defaults \
                  instead of failing the whole course."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (fetch, batch)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one course and print its extracted record
    ///
    /// Example: course-scout fetch course/learn-rust
    Fetch {
        /// Course identifier (the course path on the platform)
        ///
        /// This is a positional argument (required, no flag needed)
        course_id: String,

        /// Output the record in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Fetch every course listed in a file (one identifier per line)
    ///
    /// Example: course-scout batch courses.txt --concurrency 20
    Batch {
        /// Path to a text file with one course identifier per line
        ///
        /// Blank lines and lines starting with '#' are skipped
        file: String,

        /// Output the records in JSON format instead of a table
        #[arg(long)]
        json: bool,

        /// How many courses to fetch concurrently (default: 10)
        ///
        /// Higher is faster but more likely to get rate-limited by
        /// the platform
        #[arg(long, default_value_t = 10)]
        concurrency: usize,
    },
}
