//! # sat_bruteforce
//!
//! `sat_bruteforce` is a command-line satisfiability checker for
//! propositional-logic formulas. It lexes and parses a formula written with
//! `v` (OR), `^` (AND), `!` (prefix NOT), parentheses and bare identifiers,
//! then decides satisfiability by exhaustively evaluating the expression
//! tree under every assignment of its distinct literals, reporting the
//! first satisfying assignment or unsatisfiability.
//!
//! This is deliberately exhaustive search: no unit propagation, no clause
//! learning, no heuristics. Time is exponential in the number of distinct
//! literals.
//!
//! ## Usage
//!
//! ```sh
//! # Solve a formula given inline
//! sat_bruteforce text --input "(p v q) ^ !p"
//!
//! # Solve a formula file, or every .sat file under a directory
//! sat_bruteforce formula.sat
//! sat_bruteforce file --path formula.sat
//! sat_bruteforce problems/
//!
//! # Generate shell completions
//! sat_bruteforce completions bash
//! ```
//!
//! ### Common options
//!
//! -   `-d, --debug`: Enable debug output (default: `false`).
//! -   `-v, --verify`: Re-evaluate the formula under the found assignment (default: `true`).
//! -   `-s, --stats`: Print parse/search statistics (default: `true`).
//! -   `-p, --print-solution`: Print the satisfying assignment (default: `true`).
//!
//! Set `RUST_LOG=debug` (or `trace`) to see the library's enumeration
//! progress via `env_logger`.

use clap::Parser;

use crate::command_line::cli::{Cli, Commands, print_completions, solve_dir, solve_file, solve_text};

mod command_line;

/// Global allocator using `tikv-jemallocator` for potentially better
/// performance and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Main entry point.
///
/// Parses command-line arguments, dispatches to the appropriate command
/// handler, and manages the overall execution flow.
fn main() {
    env_logger::init();

    let cli = Cli::parse();

    // Handle the case where a path is provided globally without a
    // subcommand: a directory is walked for .sat files, anything else is
    // treated as a single formula file.
    if let Some(path) = &cli.path {
        if cli.command.is_none() {
            let result = if path.is_dir() {
                solve_dir(path, &cli.common)
            } else {
                solve_file(path, &cli.common)
            };
            exit_on_error(result);
            return;
        }
    }

    match cli.command {
        Some(Commands::File { path, common }) => exit_on_error(solve_file(&path, &common)),
        Some(Commands::Text { input, common }) => exit_on_error(solve_text(&input, &common)),
        Some(Commands::Completions { shell }) => print_completions(shell),
        None => {
            eprintln!("No command provided. Use --help for more information.");
            std::process::exit(1);
        }
    }
}

/// Prints the error message and exits non-zero if `result` is an error.
fn exit_on_error(result: Result<(), String>) {
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
