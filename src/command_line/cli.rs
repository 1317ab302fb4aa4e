use clap::{Args, CommandFactory, Parser, Subcommand};
use itertools::Itertools;
use sat_bruteforce::logic::assignment::Assignment;
use sat_bruteforce::logic::expr::Expr;
use sat_bruteforce::logic::parser::parse;
use sat_bruteforce::logic::solver::{BruteForce, SolveStats};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the satisfiability checker.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(
    name = "sat_bruteforce",
    version,
    about = "A brute-force propositional satisfiability checker"
)]
pub(crate) struct Cli {
    /// An optional global path argument. If provided without a subcommand,
    /// it's treated as the path to a formula file to solve, or a directory
    /// of `.sat` files to solve in turn.
    #[arg(global = true)]
    pub path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `file`, `text`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve a formula read from a file.
    File {
        /// Path to the formula file.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a formula provided as plain text.
    Text {
        /// The formula itself, e.g. "(p v q) ^ !p".
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Enable debug output, providing more verbose logging while solving.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Enable verification of the found assignment. If one is found, the
    /// formula is re-evaluated under it.
    #[arg(short, long, default_value_t = true)]
    pub(crate) verify: bool,

    /// Enable printing of performance and problem statistics after solving.
    #[arg(short, long, default_value_t = true)]
    pub(crate) stats: bool,

    /// Enable printing of the satisfying assignment if one is found.
    #[arg(short, long, default_value_t = true)]
    pub(crate) print_solution: bool,
}

/// Writes completion definitions for the given shell to stdout.
pub(crate) fn print_completions(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

/// Solves a formula read from a file.
///
/// # Errors
///
/// If the file doesn't exist or its contents don't parse.
pub(crate) fn solve_file(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("Formula file does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Provided path is not a file: {}", path.display()));
    }

    let source =
        std::fs::read_to_string(path).map_err(|e| format!("Unable to read {}: {e}", path.display()))?;

    println!("Solving: {}", path.display());
    solve_text(&source, common)
}

/// Solves a directory of formula files.
///
/// Iterates over all `.sat` files under the directory, parses each one,
/// solves it, and reports the results.
///
/// # Errors
///
/// If any formula file cannot be read or parsed.
pub(crate) fn solve_dir(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.is_dir() {
        return Err(format!("Provided path is not a directory: {}", path.display()));
    }

    for entry in walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path();

        if !file_path.is_file() {
            continue;
        }

        if file_path.extension().is_none_or(|ext| ext != "sat") {
            eprintln!("Skipping non-formula file: {}", file_path.display());
            continue;
        }

        solve_file(file_path, common)?;
    }

    Ok(())
}

/// Parses a formula, solves it, and reports results including stats and
/// verification.
///
/// # Errors
///
/// If the formula fails to scan or parse. The full positional diagnostic is
/// carried in the returned message.
pub(crate) fn solve_text(source: &str, common: &CommonOptions) -> Result<(), String> {
    let time = std::time::Instant::now();
    let expr = parse(source).map_err(|e| e.to_string())?;
    let parse_time = time.elapsed();

    println!("Processed input: {expr}");

    let literals = expr.ordered_literals();
    println!("Literals: {}", literals.iter().join(", "));

    if common.debug {
        println!("Formula: {expr}");
        println!("Literal count: {}", literals.len());
        println!("Search space: 2^{}", literals.len());
    }

    epoch::advance().unwrap();

    let time = std::time::Instant::now();
    let mut solver = BruteForce::with_literals(expr.clone(), literals);
    let sol = solver
        .solve()
        .map_err(|e| format!("Internal solver error: {e}"))?;
    let elapsed = time.elapsed();

    if common.debug {
        println!("Solution: {sol:?}");
        println!("Time: {elapsed:?}");
    }

    epoch::advance().unwrap();

    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();

    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    if common.verify {
        verify_solution(&expr, sol.as_ref());
    }

    if common.stats {
        print_stats(
            parse_time,
            elapsed,
            solver.stats(),
            allocated_mib,
            resident_mib,
            common.print_solution,
            sol.as_ref(),
        );
    }

    Ok(())
}

/// Verifies a found assignment by re-evaluating the formula under it.
///
/// Prints whether the verification was successful. If verification fails,
/// it panics. If `sol` is `None` (unsatisfiable), it prints "UNSAT".
pub(crate) fn verify_solution(expr: &Expr, sol: Option<&Assignment>) {
    if let Some(assignment) = sol {
        let ok = expr.eval(assignment) == Ok(true);
        println!("Verified: {ok:?}");
        assert!(ok, "Assignment failed verification!");
    } else {
        println!("UNSAT");
    }
}

/// Helper function to print a single statistic line in a formatted table row.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate
/// (value/second).
pub(crate) fn stat_line_with_rate(label: &str, value: u64, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and search statistics, the satisfying
/// assignment if requested, and the final verdict.
pub(crate) fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    s: SolveStats,
    allocated: f64,
    resident: f64,
    print_solution: bool,
    sol: Option<&Assignment>,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]=========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Literals", s.literal_count);
    stat_line("Search space", format!("2^{}", s.literal_count));

    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Combinations", s.combinations_tested, elapsed_secs);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");

    if let Some(assignment) = sol {
        if print_solution {
            println!("Combination found: {assignment}");
        }
    }

    if sol.is_some() {
        println!("\nSATISFIABLE");
    } else {
        println!("\nUNSATISFIABLE");
    }
}
