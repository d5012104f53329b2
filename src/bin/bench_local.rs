//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of the grid search on *your* machine.
//! - Builds square grids of a few sizes, then times one batch report per grid.
//! - Each batch mixes words that are present (cut from the grid in every direction)
//!   with words that are not.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Time a puzzle file instead:     `cargo run --bin bench_local --release -- -i puzzle.txt`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - Grids are filled from a fixed-seed generator, so runs are comparable.
//! - One warm-up run per case is done (not included in timing).
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use std::hint::black_box;
use std::path::PathBuf;
use std::time::Instant;

use letter_soup::direction::Direction;
use letter_soup::grid::Grid;
use letter_soup::puzzle::{Puzzle, DEFAULT_SEPARATOR};
use letter_soup::report::build_report;

/// Simple local benchmark runner for the letter-soup search.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Time this puzzle file instead of the generated grids
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Number of repeats per case (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Number of words searched per generated grid
    #[arg(short = 'w', long = "words", default_value_t = 200)]
    num_words: usize,
}

/// Side lengths of the generated square grids.
const GRID_SIDES: [usize; 4] = [10, 50, 200, 500];

/// Deterministic letter source (64-bit LCG), so every run searches the same grids.
struct Letters(u64);

impl Letters {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        ((self.0 >> 33) % bound as u64) as usize
    }

    fn next_letter(&mut self) -> char {
        char::from(b'A' + self.next_index(26) as u8)
    }
}

/// A square grid of random letters plus a word list: half cut out of the grid along
/// random directions, half random strings (almost always absent).
fn generated_case(side: usize, num_words: usize, letters: &mut Letters) -> (Grid, Vec<String>) {
    let rows: Vec<String> = (0..side)
        .map(|_| (0..side).map(|_| letters.next_letter()).collect())
        .collect();
    let grid = match Grid::from_rows(&rows) {
        Ok(grid) => grid,
        Err(e) => unreachable!("generated grid is rectangular: {e}"),
    };

    let mut words = Vec::with_capacity(num_words);
    for i in 0..num_words {
        let len = 3 + letters.next_index(side.min(8) - 2);
        if i % 2 == 0 {
            let direction = Direction::ALL[letters.next_index(8)];
            let (dr, dc) = direction.delta();
            let (mut r, mut c) = (letters.next_index(side) as isize, letters.next_index(side) as isize);
            let mut word = String::with_capacity(len);
            while word.len() < len {
                let Some(cell) = grid.get(r, c) else { break };
                word.push(cell);
                r += dr;
                c += dc;
            }
            words.push(word);
        } else {
            words.push((0..len).map(|_| letters.next_letter()).collect());
        }
    }
    (grid, words)
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

/// Time `build_report` over `grid` and `words`; returns (median seconds, words found).
fn time_case(grid: &Grid, words: &[String], num_repeats: usize) -> (f64, usize) {
    // warm-up, not timed
    let mut found = build_report(grid, words).found_count();

    let mut times = Vec::with_capacity(num_repeats);
    for _ in 0..num_repeats {
        let t_search = Instant::now();
        let report = build_report(black_box(grid), black_box(words));
        times.push(t_search.elapsed().as_secs_f64());
        found = black_box(report.found_count());
    }
    (median(times), found)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    eprintln!("{:>12} | {:>7} | {:>7} | {:>10}", "grid", "words", "found", "median (s)");
    eprintln!("{:-<12}-+-{:-<7}-+-{:-<7}-+-{:-<10}", "", "", "", "");

    if let Some(path) = &cli.input {
        let puzzle = Puzzle::load_from_path(path, DEFAULT_SEPARATOR)?;
        let (med, found) = time_case(&puzzle.grid, &puzzle.words, cli.num_repeats);
        let dims = format!("{}x{}", puzzle.grid.rows(), puzzle.grid.cols());
        eprintln!("{dims:>12} | {:>7} | {found:>7} | {med:>10.4}", puzzle.words.len());
        return Ok(());
    }

    let mut letters = Letters(0x5eed);
    for side in GRID_SIDES {
        let (grid, words) = generated_case(side, cli.num_words, &mut letters);
        let (med, found) = time_case(&grid, &words, cli.num_repeats);
        let dims = format!("{side}x{side}");
        eprintln!("{dims:>12} | {:>7} | {found:>7} | {med:>10.4}", words.len());
    }

    Ok(())
}
