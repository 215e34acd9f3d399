//! OR combinator - logical disjunction of rules
//!
//! This module provides the [`Or`] combinator which combines two rules with
//! logical OR semantics - at least one rule must pass for the combined rule
//! to succeed.

use crate::foundation::{Outcome, Rule, Violation};

/// Combines two rules with logical OR.
///
/// At least one rule must pass. If the first rule passes, the second is not
/// evaluated (short-circuits). If both fail, the combined violation carries
/// the code `any_of` with the two branch codes as params.
///
/// # Type Parameters
///
/// * `L` - The left (first) rule type
/// * `R` - The right (second) rule type
///
/// # Examples
///
/// ```rust,ignore
/// use roster_validator::combinators::Or;
/// use roster_validator::foundation::Rule;
///
/// let rule = Or::new(exact_length(5), exact_length(10));
/// assert!(rule.evaluate("hello").is_ok());
/// assert!(rule.evaluate("hi").is_err()); // neither 5 nor 10
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left rule.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right rule.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right rules.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Rule for Or<L, R>
where
    L: Rule,
    R: Rule<Value = L::Value>,
{
    type Value = L::Value;

    fn evaluate(&self, value: &Self::Value) -> Outcome {
        match self.left.evaluate(value) {
            Ok(()) => Ok(()),
            Err(left_violation) => match self.right.evaluate(value) {
                Ok(()) => Ok(()),
                Err(right_violation) => Err(Violation::new("any_of")
                    .with_param("left", left_violation.code.clone())
                    .with_param("right", right_violation.code.clone())),
            },
        }
    }
}

/// Creates an `Or` combinator from two rules.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Rule,
    R: Rule<Value = L::Value>,
{
    Or::new(left, right)
}
