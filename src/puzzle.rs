//! `puzzle`: reading a letter-soup puzzle definition and writing its report.
//!
//! A puzzle is plain text: the grid rows, a separator line (`---` by default), then
//! one word per line:
//!
//! ```text
//! C A T
//! X X X
//! ---
//! cat
//! dog
//! ```
//!
//! The parsing logic:
//! - The first line whose trimmed text equals the separator splits the two sections.
//! - Grid lines have every space removed and are trimmed; blank grid lines are skipped.
//! - Word lines are trimmed; blank word lines are skipped. Word order is kept.
//!
//! Only `parse_from_str` is available on every target. Reading and writing files is
//! native-only, since wasm builds get their puzzle text from JavaScript.

use crate::errors::ParseError;
use crate::grid::Grid;
use crate::report::{build_report, Report};

/// The separator line used when none is given.
pub const DEFAULT_SEPARATOR: &str = "---";

/// A parsed puzzle: the grid and the words to look for in it.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub grid: Grid,
    /// Words as written in the puzzle (original case), in order.
    pub words: Vec<String>,
}

impl Puzzle {
    /// Parse a puzzle from an in-memory string.
    ///
    /// # Errors
    ///
    /// - [`ParseError::MissingSeparator`] if no line equals `separator`.
    /// - [`ParseError::InvalidGrid`] if the grid lines are empty or ragged.
    pub fn parse_from_str(contents: &str, separator: &str) -> Result<Puzzle, ParseError> {
        let mut lines = contents.lines();

        let mut grid_rows: Vec<Vec<char>> = Vec::new();
        let mut found_separator = false;
        for raw_line in lines.by_ref() {
            if raw_line.trim() == separator {
                found_separator = true;
                break;
            }
            let row: Vec<char> = raw_line.trim().chars().filter(|&c| c != ' ').collect();
            if !row.is_empty() {
                grid_rows.push(row);
            }
        }
        if !found_separator {
            return Err(ParseError::MissingSeparator { separator: separator.to_string() });
        }

        // everything after the separator is the word list
        let words: Vec<String> = lines
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        let grid = Grid::new(grid_rows)?;
        log::debug!("Parsed {}x{} grid and {} words", grid.rows(), grid.cols(), words.len());

        Ok(Puzzle { grid, words })
    }

    /// Native-only convenience method: read a puzzle file and parse it.
    ///
    /// # Errors
    ///
    /// Will return an `io::Error` if unable to read a file at `path`, or a [`ParseError`]
    /// if the contents do not parse.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        separator: &str,
    ) -> Result<Puzzle, Box<dyn std::error::Error>> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read puzzle from '{}': {}", path_ref.display(), e)
            )
        })?;

        Ok(Self::parse_from_str(&data, separator)?)
    }

    /// Search the grid for every word.
    #[must_use]
    pub fn solve(&self) -> Report {
        build_report(&self.grid, &self.words)
    }
}

/// Write `report` to `path` as indented JSON, replacing any existing file.
///
/// # Errors
///
/// Any I/O error from removing the old file or writing the new one.
#[cfg(not(target_arch = "wasm32"))]
pub fn write_report<P: AsRef<std::path::Path>>(report: &Report, path: P) -> std::io::Result<()> {
    let path_ref = path.as_ref();

    if path_ref.exists() {
        log::info!("Replacing existing report at {}", path_ref.display());
        std::fs::remove_file(path_ref)?;
    }

    let json = report.to_json_pretty().map_err(std::io::Error::other)?;
    std::fs::write(path_ref, json)
}
