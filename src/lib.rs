//! Brute-force propositional satisfiability checking.
//!
//! This crate lexes and parses a textual propositional-logic formula into an
//! expression tree, then decides satisfiability by exhaustively evaluating
//! the tree under every assignment of its distinct literals. The input
//! syntax uses `v` for OR, `^` for AND, `!` for prefix negation,
//! parentheses for grouping, and bare identifiers for literals.
//!
//! ```
//! use sat_bruteforce::logic::parser::parse;
//! use sat_bruteforce::logic::solver::BruteForce;
//!
//! let expr = parse("(p v q) ^ !p").unwrap();
//! let mut solver = BruteForce::new(expr);
//! let assignment = solver.solve().unwrap().expect("satisfiable");
//! assert_eq!(assignment.value("p"), Some(false));
//! assert_eq!(assignment.value("q"), Some(true));
//! ```

/// The `logic` module implements the formula pipeline: scanner, parser,
/// expression tree, truth assignments and the brute-force solver.
pub mod logic;
