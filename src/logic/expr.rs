//! The expression tree built by the parser.
//!
//! A formula is a strict single-owner tree: every child is exclusively owned
//! by its parent through a `Box`, and nodes are never mutated after
//! construction. Negation is not a node kind of its own — each variant
//! carries a `negated` flag that flips the node's own result after its
//! children have been evaluated. Parenthesized sub-expressions are kept as
//! distinct [`Expr::Group`] nodes rather than elided, because the group
//! carries its own negation flag independent of anything inside it.

use crate::logic::assignment::{Assignment, UnboundLiteralError};
use rustc_hash::FxHashSet;
use std::fmt;

/// A binary connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    /// Conjunction, written `^`.
    And,
    /// Disjunction, written `v`.
    Or,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "^"),
            Self::Or => write!(f, "v"),
        }
    }
}

/// A node of the expression tree.
///
/// The set of variants is closed, so the renderer, the literal collector and
/// the evaluator all get compile-time exhaustiveness from pattern matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A leaf referencing a named boolean variable.
    Literal {
        /// The variable's name. Case-sensitive.
        name: String,
        /// Whether the leaf's value is negated.
        negated: bool,
    },
    /// A strictly binary combination of two sub-expressions.
    Binary {
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
        /// The connective joining the operands.
        op: Operator,
        /// Whether the combined result is negated.
        negated: bool,
    },
    /// An explicit parenthesized sub-expression.
    Group {
        /// The expression inside the parentheses.
        inner: Box<Expr>,
        /// Whether the group's result is negated. Independent of any
        /// negation already present inside `inner`.
        negated: bool,
    },
}

impl Expr {
    /// Creates a literal leaf.
    #[must_use]
    pub fn literal(name: impl Into<String>, negated: bool) -> Self {
        Self::Literal {
            name: name.into(),
            negated,
        }
    }

    /// Creates a (non-negated) binary combination.
    #[must_use]
    pub fn binary(lhs: Self, op: Operator, rhs: Self) -> Self {
        Self::Binary {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            op,
            negated: false,
        }
    }

    /// Creates a group wrapping `inner`.
    #[must_use]
    pub fn group(inner: Self, negated: bool) -> Self {
        Self::Group {
            inner: Box::new(inner),
            negated,
        }
    }

    /// Whether this node's own result is negated.
    #[must_use]
    pub const fn is_negated(&self) -> bool {
        match self {
            Self::Literal { negated, .. }
            | Self::Binary { negated, .. }
            | Self::Group { negated, .. } => *negated,
        }
    }

    /// The set of distinct literal names appearing anywhere in the tree.
    ///
    /// Negation is irrelevant to membership: `p` and `!p` both contribute
    /// `p`. The returned set imposes no ordering; callers that need a fixed
    /// bit-position mapping should use [`Expr::ordered_literals`].
    #[must_use]
    pub fn literals(&self) -> FxHashSet<&str> {
        let mut names = FxHashSet::default();
        self.visit_literals(&mut |name| {
            names.insert(name);
        });
        names
    }

    /// The distinct literal names in first-appearance order (a left-to-right
    /// walk of the tree).
    ///
    /// This is the deterministic sequence the brute-force solver uses to map
    /// literals to bit positions, stable across runs.
    #[must_use]
    pub fn ordered_literals(&self) -> Vec<String> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut ordered = Vec::new();
        self.visit_literals(&mut |name| {
            if seen.insert(name) {
                ordered.push(name.to_string());
            }
        });
        ordered
    }

    /// Calls `visit` with every literal name in the tree, left to right,
    /// visiting each node exactly once.
    fn visit_literals<'a>(&'a self, visit: &mut impl FnMut(&'a str)) {
        match self {
            Self::Literal { name, .. } => visit(name),
            Self::Binary { lhs, rhs, .. } => {
                lhs.visit_literals(visit);
                rhs.visit_literals(visit);
            }
            Self::Group { inner, .. } => inner.visit_literals(visit),
        }
    }

    /// Evaluates the tree under `assignment`.
    ///
    /// A literal takes its bound value; a binary node evaluates both
    /// operands (no short-circuiting — both sides are plain boolean values
    /// with no side effects) and combines them with its connective; a group
    /// takes its inner value. Each result is then flipped if the node's
    /// `negated` flag is set. Evaluation has no hidden state: the same tree
    /// under the same assignment always yields the same result.
    ///
    /// # Errors
    ///
    /// Returns [`UnboundLiteralError`] if the tree references a name absent
    /// from `assignment`. This cannot happen when the assignment was built
    /// from the literal set collected from the same tree; it indicates a
    /// contract violation by the caller, not a user-facing failure.
    pub fn eval(&self, assignment: &Assignment) -> Result<bool, UnboundLiteralError> {
        let value = match self {
            Self::Literal { name, .. } => assignment
                .value(name)
                .ok_or_else(|| UnboundLiteralError { name: name.clone() })?,
            Self::Binary { lhs, rhs, op, .. } => {
                let left = lhs.eval(assignment)?;
                let right = rhs.eval(assignment)?;
                match op {
                    Operator::And => left && right,
                    Operator::Or => left || right,
                }
            }
            Self::Group { inner, .. } => inner.eval(assignment)?,
        };
        Ok(value != self.is_negated())
    }
}

/// Canonical textual rendering: `!`-prefixed when negated, operands joined
/// by the connective symbol with single spaces, groups parenthesized.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negated() {
            write!(f, "!")?;
        }
        match self {
            Self::Literal { name, .. } => write!(f, "{name}"),
            Self::Binary { lhs, rhs, op, .. } => write!(f, "{lhs} {op} {rhs}"),
            Self::Group { inner, .. } => write!(f, "({inner})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn and(lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary(lhs, Operator::And, rhs)
    }

    fn or(lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary(lhs, Operator::Or, rhs)
    }

    #[test]
    fn test_render_literal() {
        assert_eq!(Expr::literal("p", false).to_string(), "p");
        assert_eq!(Expr::literal("p", true).to_string(), "!p");
    }

    #[test]
    fn test_render_binary_and_group() {
        let expr = and(Expr::literal("p", false), Expr::literal("q", true));
        assert_eq!(expr.to_string(), "p ^ !q");

        let grouped = Expr::group(or(Expr::literal("p", false), Expr::literal("q", false)), true);
        assert_eq!(grouped.to_string(), "!(p v q)");
    }

    #[test]
    fn test_literals_ignore_negation() {
        let expr = and(Expr::literal("p", false), Expr::literal("p", true));
        let names = expr.literals();
        assert_eq!(names.len(), 1);
        assert!(names.contains("p"));
    }

    #[test]
    fn test_ordered_literals_first_appearance() {
        let expr = and(
            or(Expr::literal("q", false), Expr::literal("p", false)),
            Expr::literal("q", true),
        );
        assert_eq!(expr.ordered_literals(), vec!["q", "p"]);
    }

    #[test]
    fn test_eval_binary_and_negation() {
        let mut assignment = Assignment::new();
        assignment.bind("p", true);
        assignment.bind("q", false);

        let expr = and(Expr::literal("p", false), Expr::literal("q", false));
        assert_eq!(expr.eval(&assignment), Ok(false));

        let expr = or(Expr::literal("p", false), Expr::literal("q", false));
        assert_eq!(expr.eval(&assignment), Ok(true));

        let expr = Expr::group(or(Expr::literal("p", false), Expr::literal("q", false)), true);
        assert_eq!(expr.eval(&assignment), Ok(false));
    }

    #[test]
    fn test_eval_is_idempotent() {
        let mut assignment = Assignment::new();
        assignment.bind("p", true);
        let expr = Expr::literal("p", true);
        assert_eq!(expr.eval(&assignment), Ok(false));
        assert_eq!(expr.eval(&assignment), Ok(false));
    }

    #[test]
    fn test_eval_unbound_literal() {
        let assignment = Assignment::new();
        let expr = Expr::literal("p", false);
        let err = expr.eval(&assignment).unwrap_err();
        assert_eq!(err.name, "p");
    }
}
