//! Brute-force satisfiability search.
//!
//! The solver enumerates every assignment of boolean values to a formula's
//! distinct literals and evaluates the tree under each, stopping at the
//! first satisfying one. With `n` literals the integers `0 .. 2^n` are
//! visited in increasing order; the `n`-bit binary representation of each
//! integer, most significant bit first, gives the values of the literals in
//! their fixed sequence. The enumeration order is therefore total and
//! deterministic, and each candidate is visited exactly once.
//!
//! This is exhaustive search, not a real SAT algorithm: there is no unit
//! propagation, no clause learning and no heuristic ordering. Time is
//! exponential in the literal count, which is inherent to the approach
//! rather than something to optimize away. The loop is sequential and
//! synchronous; any wall-clock budget has to be imposed by the caller.

use crate::logic::assignment::{Assignment, UnboundLiteralError};
use crate::logic::expr::Expr;
use log::{debug, trace};

/// Statistics collected while solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveStats {
    /// Number of candidate assignments evaluated.
    pub combinations_tested: u64,
    /// Number of distinct literals, i.e. `log2` of the full search space.
    pub literal_count: usize,
}

/// The brute-force solver: an expression tree plus the fixed literal
/// sequence that defines bit positions during enumeration.
#[derive(Debug, Clone)]
pub struct BruteForce {
    expr: Expr,
    literals: Vec<String>,
    stats: SolveStats,
}

impl BruteForce {
    /// Creates a solver for `expr`, deriving the literal sequence from the
    /// tree in first-appearance order.
    #[must_use]
    pub fn new(expr: Expr) -> Self {
        let literals = expr.ordered_literals();
        Self::with_literals(expr, literals)
    }

    /// Creates a solver with an explicit literal sequence.
    ///
    /// The sequence must cover every literal in `expr`; otherwise
    /// [`BruteForce::solve`] reports an [`UnboundLiteralError`] on the first
    /// evaluation.
    #[must_use]
    pub fn with_literals(expr: Expr, literals: Vec<String>) -> Self {
        let stats = SolveStats {
            combinations_tested: 0,
            literal_count: literals.len(),
        };
        Self {
            expr,
            literals,
            stats,
        }
    }

    /// The literal sequence used for enumeration.
    #[must_use]
    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    /// Statistics from the most recent [`BruteForce::solve`] call.
    #[must_use]
    pub const fn stats(&self) -> SolveStats {
        self.stats
    }

    /// Runs the exhaustive search.
    ///
    /// Returns the first satisfying [`Assignment`] in increasing binary
    /// order, or `None` when all `2^n` combinations fail (unsatisfiable).
    /// The search always terminates: the space is finite and each candidate
    /// is tested at most once.
    ///
    /// # Errors
    ///
    /// Returns [`UnboundLiteralError`] only if the literal sequence does not
    /// cover the tree — a contract violation by whoever constructed the
    /// solver with an explicit sequence.
    pub fn solve(&mut self) -> Result<Option<Assignment>, UnboundLiteralError> {
        let n = self.literals.len();
        self.stats = SolveStats {
            combinations_tested: 0,
            literal_count: n,
        };

        let mut assignment = Assignment::with_capacity(n);
        for name in &self.literals {
            assignment.bind(name, false);
        }

        // Formulas with 128+ distinct literals are unreachable in practice:
        // the loop below could never finish for them anyway.
        let combinations: u128 = 1 << n;

        for combination in 0..combinations {
            for (i, name) in self.literals.iter().enumerate() {
                let bit = (combination >> (n - 1 - i)) & 1;
                assignment.bind(name.as_str(), bit == 1);
            }
            self.stats.combinations_tested += 1;
            trace!("testing combination {combination}: {assignment}");

            if self.expr.eval(&assignment)? {
                debug!(
                    "satisfied after {} of {combinations} combinations",
                    self.stats.combinations_tested
                );
                return Ok(Some(assignment));
            }
        }

        debug!("exhausted {combinations} combinations, unsatisfiable");
        Ok(None)
    }
}

/// Convenience wrapper: solves `expr` under the given literal sequence.
///
/// # Errors
///
/// See [`BruteForce::solve`].
pub fn solve(expr: &Expr, literals: &[String]) -> Result<Option<Assignment>, UnboundLiteralError> {
    BruteForce::with_literals(expr.clone(), literals.to_vec()).solve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::parser::parse;

    fn solver_for(source: &str) -> BruteForce {
        BruteForce::new(parse(source).unwrap())
    }

    #[test]
    fn test_single_literal_false_tested_first() {
        let mut solver = solver_for("p");
        let assignment = solver.solve().unwrap().unwrap();
        assert_eq!(assignment.value("p"), Some(true));
        // Combination 0 binds p = false and fails, combination 1 succeeds.
        assert_eq!(solver.stats().combinations_tested, 2);
    }

    #[test]
    fn test_conjunction_found_last() {
        let mut solver = solver_for("p ^ q");
        let assignment = solver.solve().unwrap().unwrap();
        assert_eq!(assignment.value("p"), Some(true));
        assert_eq!(assignment.value("q"), Some(true));
        assert_eq!(solver.stats().combinations_tested, 4);
    }

    #[test]
    fn test_contradiction_is_unsatisfiable() {
        let mut solver = solver_for("p ^ !p");
        assert_eq!(solver.solve().unwrap(), None);
        // One literal, so both combinations get exhausted.
        assert_eq!(solver.stats().combinations_tested, 2);
        assert_eq!(solver.stats().literal_count, 1);
    }

    #[test]
    fn test_first_satisfying_assignment_in_binary_order() {
        // For literal order [p, q] the candidates are 00, 01, 10, 11; the
        // first satisfying one for p v q is p = false, q = true.
        let mut solver = solver_for("p v q");
        let assignment = solver.solve().unwrap().unwrap();
        assert_eq!(assignment.value("p"), Some(false));
        assert_eq!(assignment.value("q"), Some(true));
        assert_eq!(solver.stats().combinations_tested, 2);
    }

    #[test]
    fn test_grouped_disjunction_with_negation() {
        let mut solver = solver_for("(p v q) ^ !p");
        let assignment = solver.solve().unwrap().unwrap();
        assert_eq!(assignment.value("p"), Some(false));
        assert_eq!(assignment.value("q"), Some(true));
    }

    #[test]
    fn test_unsatisfiable_exhausts_search_space() {
        let mut solver = solver_for("(p v q) ^ !p ^ !q");
        assert_eq!(solver.solve().unwrap(), None);
        assert_eq!(solver.stats().combinations_tested, 4);
    }

    #[test]
    fn test_explicit_literal_order_defines_bit_positions() {
        let expr = parse("p v q").unwrap();
        let mut solver =
            BruteForce::with_literals(expr, vec!["q".to_string(), "p".to_string()]);
        let assignment = solver.solve().unwrap().unwrap();
        // With order [q, p] the first satisfying candidate is 01: q = false,
        // p = true.
        assert_eq!(assignment.value("q"), Some(false));
        assert_eq!(assignment.value("p"), Some(true));
    }

    #[test]
    fn test_missing_literal_in_sequence_is_a_contract_violation() {
        let expr = parse("p ^ q").unwrap();
        let mut solver = BruteForce::with_literals(expr, vec!["p".to_string()]);
        let err = solver.solve().unwrap_err();
        assert_eq!(err.name, "q");
    }

    #[test]
    fn test_free_function_matches_solver() {
        let expr = parse("(a v b) ^ !a").unwrap();
        let literals = expr.ordered_literals();
        let assignment = solve(&expr, &literals).unwrap().unwrap();
        assert_eq!(assignment.value("a"), Some(false));
        assert_eq!(assignment.value("b"), Some(true));
    }

    #[test]
    fn test_stats_reset_between_runs() {
        let mut solver = solver_for("p");
        solver.solve().unwrap();
        solver.solve().unwrap();
        assert_eq!(solver.stats().combinations_tested, 2);
    }
}
