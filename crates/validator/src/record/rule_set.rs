//! Ordered rule sequences with explicit failure-handling modes

use crate::foundation::{Rule, Violation};

// ============================================================================
// MODE
// ============================================================================

/// How a [`RuleSet`] handles a failing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Stop at the first failing rule and report only its violation.
    ///
    /// This is the default: later rules in a chain usually assume the
    /// earlier ones passed (a length check on a value already known to be
    /// non-empty), so running them after a failure is meaningless.
    #[default]
    ShortCircuit,
    /// Run every rule regardless of earlier failures and report all
    /// violations. Useful for UIs that show every problem at once.
    Accumulate,
}

// ============================================================================
// RULE SET
// ============================================================================

/// An ordered sequence of rules bound to one field value type.
///
/// Rules are evaluated in insertion order. The [`Mode`] decides whether a
/// failure suppresses the remaining rules (short-circuit) or every rule
/// runs (accumulate).
///
/// A rule set holds no mutable state, so one instance serves any number of
/// concurrent evaluations.
///
/// # Examples
///
/// ```rust,ignore
/// use roster_validator::prelude::*;
///
/// let rules = RuleSet::short_circuit()
///     .rule(not_empty())
///     .rule(length_between(2, 10)?)
///     .rule(alphabetic());
///
/// assert!(rules.evaluate("Al").is_empty());
/// assert_eq!(rules.evaluate("").len(), 1); // stops at not_empty
/// ```
pub struct RuleSet<V: ?Sized> {
    rules: Vec<Box<dyn Rule<Value = V> + Send + Sync>>,
    mode: Mode,
}

impl<V: ?Sized> RuleSet<V> {
    /// Creates an empty rule set with the given mode.
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            rules: Vec::new(),
            mode,
        }
    }

    /// Creates an empty short-circuit rule set (the recommended default).
    #[must_use]
    pub fn short_circuit() -> Self {
        Self::new(Mode::ShortCircuit)
    }

    /// Creates an empty accumulate rule set.
    #[must_use]
    pub fn accumulate() -> Self {
        Self::new(Mode::Accumulate)
    }

    /// Appends a rule. Order is evaluation order.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<R>(mut self, rule: R) -> Self
    where
        R: Rule<Value = V> + Send + Sync + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Returns the failure-handling mode of this rule set.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluates the value against every rule per the mode.
    ///
    /// Returns the violations in rule declaration order; an empty vector
    /// means the value passed.
    #[must_use = "violations must be checked"]
    pub fn evaluate(&self, value: &V) -> Vec<Violation> {
        match self.mode {
            Mode::ShortCircuit => self
                .rules
                .iter()
                .find_map(|rule| rule.evaluate(value).err())
                .into_iter()
                .collect(),
            Mode::Accumulate => self
                .rules
                .iter()
                .filter_map(|rule| rule.evaluate(value).err())
                .collect(),
        }
    }
}

impl<V: ?Sized> std::fmt::Debug for RuleSet<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules.len())
            .field("mode", &self.mode)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
