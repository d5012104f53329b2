use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use letter_soup::errors::ParseError;
use letter_soup::puzzle::{self, Puzzle, DEFAULT_SEPARATOR};

/// Letter-soup solver: reports which words appear in the grid, in any of eight directions
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Path to the puzzle file (grid rows, a separator line, then one word per line)
    input: PathBuf,

    /// Where to write the JSON report (an existing file is replaced)
    #[arg(short, long, default_value = "result.json")]
    output: PathBuf,

    /// Line that separates the grid from the word list
    #[arg(short, long, default_value = DEFAULT_SEPARATOR)]
    separator: String,

    /// Print the JSON report on stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Also list each word with its result on stderr
    #[arg(long)]
    summary: bool,
}

/// Entry point of the letter-soup CLI.
///
/// Delegates to [`try_main`], printing any error (with its code and help, when it has
/// one) before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var(letter_soup::log::DEBUG_ENV_VAR).is_ok();
    letter_soup::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(parse_err) = e.downcast_ref::<ParseError>() {
            eprintln!("Error: {}", parse_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load and parse the puzzle file.
/// 3. Search the grid for every word.
/// 4. Write the report (file or stdout).
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let puzzle = Puzzle::load_from_path(&cli.input, &cli.separator)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let t_solve = Instant::now();
    let report = puzzle.solve();
    let solve_secs = t_solve.elapsed().as_secs_f64();

    if cli.summary {
        for (word, found) in report.iter() {
            eprintln!("{word}: {}", if found { "found" } else { "not found" });
        }
    }

    if cli.stdout {
        println!("{}", report.to_json_pretty()?);
    } else {
        puzzle::write_report(&report, &cli.output)?;
        println!("Report saved at: {}", cli.output.display());
    }

    log::debug!(
        "Loaded {}x{} grid in {:.3}s; searched {} words in {:.3}s.",
        puzzle.grid.rows(),
        puzzle.grid.cols(),
        load_secs,
        report.len(),
        solve_secs
    );

    Ok(())
}
