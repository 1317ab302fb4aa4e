//! Truth assignments over a formula's literals.
//!
//! An [`Assignment`] binds every literal name of a formula to a boolean
//! value. The brute-force solver produces one candidate per enumerated
//! combination; the binding order is remembered so that displaying an
//! assignment is deterministic and follows the solver's literal sequence.

use itertools::Itertools;
use rustc_hash::FxHashMap;
use std::error::Error;
use std::fmt;

/// The tree referenced a literal that the assignment does not bind.
///
/// This can only arise from caller misuse — evaluating a tree against an
/// assignment built from a different literal set. It is a programming
/// contract violation, not a user-facing error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnboundLiteralError {
    /// The name the tree referenced but the assignment does not bind.
    pub name: String,
}

impl fmt::Display for UnboundLiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "literal `{}' is not bound by the assignment", self.name)
    }
}

impl Error for UnboundLiteralError {}

/// A total mapping from literal names to boolean values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment {
    names: Vec<String>,
    values: FxHashMap<String, bool>,
}

impl Assignment {
    /// Creates an empty assignment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty assignment with capacity for `n` bindings.
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            names: Vec::with_capacity(n),
            values: FxHashMap::with_capacity_and_hasher(n, rustc_hash::FxBuildHasher),
        }
    }

    /// Binds `name` to `value`, overwriting any previous binding. First-time
    /// bindings extend the remembered binding order; rebinding an existing
    /// name allocates nothing, so the solver can reuse one assignment across
    /// the whole enumeration.
    pub fn bind(&mut self, name: &str, value: bool) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
        } else {
            self.names.push(name.to_string());
            self.values.insert(name.to_string(), value);
        }
    }

    /// The value bound to `name`, if any.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }

    /// The number of bound literals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no literals are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates the bindings in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.names
            .iter()
            .map(|name| (name.as_str(), self.values[name]))
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.iter()
                .map(|(name, value)| format!("{name} = {value}"))
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_and_lookup() {
        let mut assignment = Assignment::new();
        assignment.bind("p", true);
        assignment.bind("q", false);

        assert_eq!(assignment.value("p"), Some(true));
        assert_eq!(assignment.value("q"), Some(false));
        assert_eq!(assignment.value("r"), None);
        assert_eq!(assignment.len(), 2);
    }

    #[test]
    fn test_rebind_keeps_order_and_length() {
        let mut assignment = Assignment::new();
        assignment.bind("p", false);
        assignment.bind("q", false);
        assignment.bind("p", true);

        assert_eq!(assignment.len(), 2);
        assert_eq!(assignment.value("p"), Some(true));
        let order: Vec<&str> = assignment.iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["p", "q"]);
    }

    #[test]
    fn test_display_follows_binding_order() {
        let mut assignment = Assignment::new();
        assignment.bind("q", true);
        assignment.bind("p", false);
        assert_eq!(assignment.to_string(), "q = true, p = false");
    }

    #[test]
    fn test_empty() {
        let assignment = Assignment::new();
        assert!(assignment.is_empty());
        assert_eq!(assignment.to_string(), "");
    }
}
