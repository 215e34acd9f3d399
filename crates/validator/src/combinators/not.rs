//! NOT combinator - logical negation of rules
//!
//! This module provides the [`Not`] combinator which inverts the result of a
//! rule - it succeeds when the inner rule fails and vice versa.

use crate::foundation::{Outcome, Rule, Violation};

/// Inverts a rule with logical NOT.
///
/// - If the inner rule passes, `Not` fails with code `not`, carrying the
///   inner code as the `inverted` param
/// - If the inner rule fails, `Not` passes
///
/// # Examples
///
/// ```rust,ignore
/// use roster_validator::combinators::Not;
/// use roster_validator::foundation::Rule;
///
/// // Forbid purely numeric names
/// let rule = Not::new(digits());
/// assert!(rule.evaluate("Al").is_ok());
/// assert!(rule.evaluate("42").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<R> {
    pub(crate) inner: R,
}

impl<R> Not<R> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> Rule for Not<R>
where
    R: Rule,
{
    type Value = R::Value;

    fn evaluate(&self, value: &Self::Value) -> Outcome {
        match self.inner.evaluate(value) {
            Ok(()) => Err(Violation::new("not")),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a rule.
pub fn not<R>(rule: R) -> Not<R>
where
    R: Rule,
{
    Not::new(rule)
}
