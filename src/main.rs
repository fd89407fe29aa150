//! # QueensSolver
//!
//! `QueensSolver` is a command-line N-Queens enumerator. It places N queens
//! on an N×N chessboard so that no two attack each other, collects every
//! valid placement via a row-by-row backtracking search, and prints the full
//! solution set.
//!
//! ## Usage
//!
//! ```sh
//! queens-solver [SIZE] [OPTIONS]
//! ```
//!
//! -   `SIZE`: The board size N. Optional; defaults to 4 when absent. A
//!     malformed value falls back to the default after a diagnostic on
//!     stderr. A resulting N ≤ 0 is rejected with a diagnostic and no
//!     computation is attempted.
//!
//! ### Options
//!
//! -   `-s, --stats`: Print search statistics (time, throughput, memory)
//!     after solving (default: `true`).
//! -   `-c, --count-only`: Print only the solution count, suppressing the
//!     boards themselves (default: `false`).
//!
//! ### Subcommands
//!
//! -   `completions <SHELL>`: Generate shell completion scripts.
//!
//! ## Example Invocations
//!
//! ```sh
//! # Enumerate the two 4×4 solutions
//! queens-solver
//!
//! # All 92 solutions of the classic 8-queens problem
//! queens-solver 8
//!
//! # Just count the 10×10 solutions
//! queens-solver 10 --count-only
//! ```
//!
//! This file (`main.rs`) contains the entry point and CLI parsing logic; the
//! search itself lives in the `queens` module of the library crate.

use clap::{Args, CommandFactory, Parser, Subcommand};
use itertools::Itertools;
use queens_solver::queens::solver::{self, Solution};
use std::time::Duration;
use tikv_jemalloc_ctl::{epoch, stats};

/// Global allocator using `tikv-jemallocator` for potentially better performance
/// and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Board size used when no argument is provided or the argument is malformed.
const DEFAULT_SIZE: i32 = 4;

/// Width each board character is padded to when a solution is printed.
const FIELD_WIDTH: usize = 4;

/// Separator line printed between solutions.
const SEPARATOR: &str = "--------------------";

/// Defines the command-line interface for the QueensSolver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "QueensSolver", version, about = "An N-Queens enumerator")]
struct Cli {
    /// The board size N. Taken as raw text so that a malformed value can fall
    /// back to the default instead of aborting argument parsing.
    #[arg(global = true)]
    size: Option<String>,

    /// Specifies the subcommand to execute (e.g. `completions`).
    #[clap(subcommand)]
    command: Option<Commands>,

    /// Common options applicable to a solving run.
    #[command(flatten)]
    common: CommonOptions,
}

/// Enumerates the available subcommands for the QueensSolver.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines options controlling how a solving run reports its results.
#[derive(Args, Debug, Default)]
struct CommonOptions {
    /// Enable printing of search statistics after solving.
    #[arg(short, long, default_value_t = true)]
    stats: bool,

    /// Print only the solution count, suppressing the boards themselves.
    #[arg(short, long, default_value_t = false)]
    count_only: bool,
}

/// Main entry point of the QueensSolver application.
///
/// Parses command-line arguments, resolves the board size, runs the search
/// once, and prints the solution set followed by optional statistics.
fn main() {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let n = parse_size(cli.size.as_deref());

    // Ensure N is valid before proceeding.
    if n <= 0 {
        eprintln!("N must be a positive integer. Cannot solve for N={n}");
        std::process::exit(1);
    }

    println!("Solving N-Queens for N = {n}");

    // Advance epoch so memory stats reflect the solving phase.
    epoch::advance().unwrap();

    let time = std::time::Instant::now();
    let solutions = solver::solve(n);
    let elapsed = time.elapsed();

    println!("Found {} distinct solution(s).", solutions.len());
    println!("{SEPARATOR}");

    if !cli.common.count_only {
        for (number, solution) in solutions.iter().enumerate() {
            println!("Solution {}:", number + 1);
            print_board(solution);
            println!("{SEPARATOR}");
        }
    }

    if cli.common.stats {
        epoch::advance().unwrap();
        let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
        let resident_bytes = stats::resident::mib().unwrap().read().unwrap();
        let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
        let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

        print_stats(elapsed, solutions.len(), allocated_mib, resident_mib);
    }
}

/// Resolves the board size from the optional command-line argument.
///
/// An absent argument yields [`DEFAULT_SIZE`]. A malformed argument yields
/// [`DEFAULT_SIZE`] after a diagnostic on stderr. Negative values parse
/// successfully here; rejecting them is the caller's decision.
fn parse_size(arg: Option<&str>) -> i32 {
    arg.map_or(DEFAULT_SIZE, |raw| {
        raw.trim().parse().unwrap_or_else(|_| {
            eprintln!(
                "Invalid argument. Please provide an integer N (board size). Using default N={DEFAULT_SIZE}."
            );
            DEFAULT_SIZE
        })
    })
}

/// Prints one solution's rows, each character padded to [`FIELD_WIDTH`].
fn print_board(solution: &Solution) {
    for row in solution.rows() {
        println!("{}", pad_row(row));
    }
}

/// Pads each character of a board row to a fixed field width.
fn pad_row(row: &str) -> String {
    row.chars()
        .map(|c| format!("{c:>width$}", width = FIELD_WIDTH))
        .join("")
}

/// Helper function to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {:<28} {:>18}  |", label, value);
}

/// Prints a summary of search statistics.
///
/// # Arguments
/// * `elapsed` - Duration spent by the solver.
/// * `count` - Number of solutions found.
/// * `allocated` - Allocated memory in MiB.
/// * `resident` - Resident memory in MiB.
fn print_stats(elapsed: Duration, count: usize, allocated: f64, resident: f64) {
    let elapsed_secs = elapsed.as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        count as f64 / elapsed_secs
    } else {
        0.0
    };

    println!("\n========================[ Search Statistics ]========================");
    stat_line("Solutions", count);
    stat_line("Solutions/sec", format!("{rate:.0}"));
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_absent_uses_default() {
        assert_eq!(parse_size(None), DEFAULT_SIZE);
    }

    #[test]
    fn test_parse_size_valid() {
        assert_eq!(parse_size(Some("8")), 8);
        assert_eq!(parse_size(Some("1")), 1);
    }

    #[test]
    fn test_parse_size_negative_values_parse() {
        // The n <= 0 rejection happens after parsing, not here.
        assert_eq!(parse_size(Some("-3")), -3);
        assert_eq!(parse_size(Some("0")), 0);
    }

    #[test]
    fn test_parse_size_malformed_falls_back_to_default() {
        assert_eq!(parse_size(Some("four")), DEFAULT_SIZE);
        assert_eq!(parse_size(Some("4.5")), DEFAULT_SIZE);
        assert_eq!(parse_size(Some("")), DEFAULT_SIZE);
    }

    #[test]
    fn test_parse_size_tolerates_surrounding_whitespace() {
        assert_eq!(parse_size(Some(" 6 ")), 6);
    }

    #[test]
    fn test_pad_row_uses_fixed_field_width() {
        assert_eq!(pad_row(".Q.."), "   .   Q   .   .");
        assert_eq!(pad_row("Q"), "   Q");
    }
}
