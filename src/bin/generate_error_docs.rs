//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `ParseError` and `GridError` implementations via their
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use letter_soup::errors::ParseError;
use letter_soup::grid::GridError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// Helper to create all `GridError` variants for documentation
fn all_grid_error_variants() -> Vec<GridError> {
    vec![
        GridError::Empty,
        GridError::Ragged { row: 2, expected: 5, found: 4 },
    ]
}

/// Helper to create all `ParseError` variants for documentation
fn all_parse_error_variants() -> Vec<ParseError> {
    vec![
        ParseError::MissingSeparator { separator: "---".to_string() },
        ParseError::InvalidGrid(GridError::Ragged { row: 2, expected: 5, found: 4 }),
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Parse Errors (P001–P002)](#parse-errors)");
    println!("- [Grid Errors (G001–G002)](#grid-errors)\n");

    println!("## Parse Errors\n");
    println!("Errors from reading a puzzle definition. An invalid grid section wraps a grid error.\n");
    generate_error_docs!(all_parse_error_variants());

    println!("## Grid Errors\n");
    println!("Errors from building a grid: it must have at least one cell and every row must be the same length.\n");
    generate_error_docs!(all_grid_error_variants());

    println!("## Error Display Formats\n");
    println!("### Simple Format");
    println!("```");
    println!("Error: <message>");
    println!("```\n");
    println!("### Detailed Format (via `display_detailed()`)");
    println!("```");
    println!("<message> (<code>)");
    println!("<help text if available>");
    println!("```\n");
}
