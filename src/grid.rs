//! The letter-soup grid: a validated, case-folded, rectangular block of characters.
//!
//! # Error Handling
//!
//! Construction fails with [`GridError`] instead of accepting input the search
//! could index out of bounds:
//!
//! - G001: `Empty` (Grid has no rows or no columns)
//! - G002: `Ragged` (Rows have different lengths)
//!
//! # Examples
//!
//! ```
//! use letter_soup::grid::Grid;
//!
//! let grid = Grid::from_rows(&["cat", "xxx"])?;
//! assert_eq!((grid.rows(), grid.cols()), (2, 3));
//! assert_eq!(grid.get(0, 0), Some('C'));
//! assert_eq!(grid.get(-1, 0), None);
//! # Ok::<(), letter_soup::grid::GridError>(())
//! ```

use std::fmt;

use crate::errors::format_error_with_code_and_help;
use crate::soup_char::SoupChar;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// No rows at all, or rows with no cells.
    #[error("grid is empty")]
    Empty,

    /// Row `row` (0-based) has `found` cells where the first row has `expected`.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
}

impl GridError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::Empty => "G001",
            GridError::Ragged { .. } => "G002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GridError::Empty => "Grid has no rows or no columns",
            GridError::Ragged { .. } => "Grid rows have different lengths",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GridError::Empty => "A search needs at least one row and one column. An empty grid usually means the separator line came first or the grid lines were all blank.",
            GridError::Ragged { .. } => "Every row of the grid must have the same number of cells. Spaces are ignored, so a short row means a missing letter.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridError::Empty => Some("Add grid rows above the separator line, e.g. 'CAT' / 'XXX' / '---'"),
            GridError::Ragged { .. } => Some("Check the reported row for a missing or extra letter"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Rectangular grid of single characters, stored row-major.
///
/// Cells are case-folded at construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Build a grid from rows of characters.
    ///
    /// # Errors
    ///
    /// [`GridError::Empty`] if there are no rows or the first row is empty;
    /// [`GridError::Ragged`] for the first row whose length differs from the first row's.
    pub fn new(rows: Vec<Vec<char>>) -> Result<Grid, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let num_rows = rows.len();
        let mut cells = Vec::with_capacity(num_rows * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged { row: i, expected: cols, found: row.len() });
            }
            cells.extend(row.into_iter().map(SoupChar::fold));
        }

        Ok(Grid { cells, rows: num_rows, cols })
    }

    /// Build a grid where each string is one row and each char one cell.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::new`].
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Grid, GridError> {
        Grid::new(rows.iter().map(|r| r.as_ref().chars().collect()).collect())
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at `(row, col)`, or `None` when the coordinates fall outside the grid.
    ///
    /// Takes signed coordinates so a walk can step off any edge and simply stop.
    #[must_use]
    pub fn get(&self, row: isize, col: isize) -> Option<char> {
        if self.in_bounds(row, col) {
            // in_bounds guarantees both are non-negative
            Some(self.cells[row as usize * self.cols + col as usize])
        } else {
            None
        }
    }

    fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Whether `c` (after case folding) appears anywhere in the grid.
    #[must_use]
    pub fn contains_char(&self, c: char) -> bool {
        let c = c.fold();
        self.cells.contains(&c)
    }

    /// Iterate over `(row, col, cell)` in row-major order.
    pub(crate) fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.cells.iter().enumerate().map(move |(i, &c)| (i / self.cols, i % self.cols, c))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let grid = Grid::from_rows(&["ABCD", "EFGH", "IJKL"]).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
    }

    #[test]
    fn test_cells_are_uppercased() {
        let grid = Grid::from_rows(&["aB", "cD"]).unwrap();
        assert_eq!(grid.to_string(), "AB\nCD");
    }

    #[test]
    fn test_get_in_and_out_of_bounds() {
        let grid = Grid::from_rows(&["AB", "CD"]).unwrap();
        assert_eq!(grid.get(1, 1), Some('D'));
        assert_eq!(grid.get(0, 1), Some('B'));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, -1), None);
    }

    #[test]
    fn test_no_rows_is_empty() {
        let rows: Vec<&str> = vec![];
        assert_eq!(Grid::from_rows(&rows), Err(GridError::Empty));
    }

    #[test]
    fn test_empty_first_row_is_empty() {
        assert_eq!(Grid::from_rows(&["", ""]), Err(GridError::Empty));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert_eq!(
            Grid::from_rows(&["ABC", "DE", "FGH"]),
            Err(GridError::Ragged { row: 1, expected: 3, found: 2 })
        );
        assert_eq!(
            Grid::from_rows(&["AB", "CD", "EFG"]),
            Err(GridError::Ragged { row: 2, expected: 2, found: 3 })
        );
    }

    #[test]
    fn test_contains_char_is_case_insensitive() {
        let grid = Grid::from_rows(&["xyz"]).unwrap();
        assert!(grid.contains_char('y'));
        assert!(grid.contains_char('Y'));
        assert!(!grid.contains_char('a'));
    }

    #[test]
    fn test_cells_iterates_row_major() {
        let grid = Grid::from_rows(&["AB", "CD"]).unwrap();
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells, vec![(0, 0, 'A'), (0, 1, 'B'), (1, 0, 'C'), (1, 1, 'D')]);
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = GridError::Empty;
        assert_eq!(err.code(), "G001");
        assert!(err.display_detailed().contains("G001"));

        let err = GridError::Ragged { row: 4, expected: 5, found: 3 };
        assert_eq!(err.code(), "G002");
        let detailed = err.display_detailed();
        assert!(detailed.contains("row 4"));
        assert!(detailed.contains('5') && detailed.contains('3'));
        assert!(err.help().is_some());
    }
}
