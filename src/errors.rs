//! Error types for reading puzzle definitions, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! - P001: `MissingSeparator` (No separator line between the grid and the word list)
//! - P002: `InvalidGrid` (The grid section does not form a valid grid; wraps [`GridError`])
//!
//! Grid validation errors have their own codes (G001-G002), see [`GridError`].
//!
//! # Examples
//!
//! ```
//! use letter_soup::puzzle::Puzzle;
//!
//! match Puzzle::parse_from_str("ABC\nDEF\nCAT", "---") {
//!     Err(e) => {
//!         assert_eq!(e.code(), "P001");
//!         println!("Error: {}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!("there is no separator line"),
//! }
//! ```

use crate::grid::GridError;

/// Custom error type for puzzle parsing
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("no separator line \"{separator}\" between grid and word list")]
    MissingSeparator { separator: String },

    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] GridError),
}

impl ParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::MissingSeparator { .. } => "P001",
            ParseError::InvalidGrid(_) => "P002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ParseError::MissingSeparator { .. } => "Missing separator line",
            ParseError::InvalidGrid(_) => "Grid section is not a valid grid",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ParseError::MissingSeparator { .. } => "A puzzle file holds the grid lines, then a separator line, then one word per line. No line equal to the separator was found, so the grid cannot be told apart from the word list.",
            ParseError::InvalidGrid(_) => "The lines above the separator were read as grid rows but do not form a non-empty rectangle. This wraps a GridError (see Grid Errors section for specific error codes).",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::MissingSeparator { .. } => Some("Put a line containing only '---' (or the value of --separator) after the last grid row"),
            ParseError::InvalidGrid(_) => None, // GridError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            ParseError::InvalidGrid(ge) => format!("{} ({})\n{}", self, self.code(), ge.display_detailed()),
            _ => format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_and_help() {
        let err = ParseError::MissingSeparator { separator: "---".to_string() };
        assert_eq!(err.code(), "P001");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("P001"));
        assert!(detailed.contains("---"));
    }

    #[test]
    fn test_invalid_grid_shows_both_codes() {
        let err = ParseError::from(GridError::Ragged { row: 2, expected: 3, found: 4 });
        assert_eq!(err.code(), "P002");
        let detailed = err.display_detailed();
        assert!(detailed.contains("P002"));
        assert!(detailed.contains("G002"));
        assert!(detailed.contains("row 2"));
    }

    /// Test that all `ParseError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();

        let errors: Vec<ParseError> = vec![
            ParseError::MissingSeparator { separator: "---".to_string() },
            ParseError::InvalidGrid(GridError::Empty),
        ];

        for err in errors {
            let code = err.code();
            assert!(code.starts_with('P'), "Error code '{}' should start with 'P'", code);
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }
    }

    #[test]
    fn test_format_without_help() {
        assert_eq!(format_error_with_code_and_help("boom", "X001", None), "boom (X001)");
        assert_eq!(format_error_with_code_and_help("boom", "X001", Some("fix it")), "boom (X001)\nfix it");
    }
}
