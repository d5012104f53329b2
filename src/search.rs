//! Grid search: does a word appear in a straight line anywhere in the grid?
//!
//! A match is a start cell plus one of the eight [`Direction`]s such that walking
//! `word.len()` cells from the start stays inside the grid and reads the word in order.
//! Only existence is reported, never the position.
//!
//! # Examples
//!
//! ```
//! use letter_soup::grid::Grid;
//! use letter_soup::search::contains;
//!
//! let grid = Grid::from_rows(&["AB", "CD"])?;
//! assert!(contains(&grid, "ad"));  // down-right from (0, 0)
//! assert!(contains(&grid, "DA"));  // up-left from (1, 1)
//! assert!(contains(&grid, "BC"));  // down-left from (0, 1)
//! assert!(!contains(&grid, "ABD")); // bends at B
//! # Ok::<(), letter_soup::grid::GridError>(())
//! ```

use crate::direction::Direction;
use crate::grid::Grid;
use crate::soup_char::fold_word;

/// Whether `word` appears in `grid` in any of the eight directions, ignoring case.
///
/// The empty word is never found.
#[must_use]
pub fn contains(grid: &Grid, word: &str) -> bool {
    let word = fold_word(word);
    let found = find_folded(grid, &word);
    log::debug!("search {:?}: {}", word.iter().collect::<String>(), if found { "found" } else { "not found" });
    found
}

/// Search with an already-folded word.
fn find_folded(grid: &Grid, word: &[char]) -> bool {
    let Some(&first) = word.first() else {
        return false;
    };

    // no straight line in the grid is longer than its longest side
    if word.len() > grid.rows().max(grid.cols()) {
        return false;
    }
    if !word.iter().all(|&c| grid.contains_char(c)) {
        return false;
    }

    grid.cells()
        .filter(|&(_, _, c)| c == first)
        .any(|(row, col, _)| Direction::ALL.into_iter().any(|d| matches_from(grid, word, row, col, d)))
}

/// Walk from `(row, col)` in `direction`, comparing one cell per char of `word`.
///
/// Stops at the first mismatch or the first step off the grid.
fn matches_from(grid: &Grid, word: &[char], row: usize, col: usize, direction: Direction) -> bool {
    let (dr, dc) = direction.delta();
    let (mut r, mut c) = (row as isize, col as isize);
    for &expected in word {
        if grid.get(r, c) != Some(expected) {
            return false;
        }
        r += dr;
        c += dc;
    }
    true
}
