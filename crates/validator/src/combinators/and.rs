//! AND combinator - logical conjunction of rules
//!
//! This module provides the [`And`] combinator which combines two rules with
//! logical AND semantics - both rules must pass for the combined rule to
//! succeed.
//!
//! # Examples
//!
//! ```rust,ignore
//! use roster_validator::combinators::And;
//! use roster_validator::foundation::Rule;
//!
//! // Both rules must pass
//! let rule = And::new(not_empty(), alphabetic());
//! assert!(rule.evaluate("Al").is_ok());
//! assert!(rule.evaluate("").is_err()); // fails not_empty
//! ```

use crate::foundation::{Outcome, Rule};

/// Combines two rules with logical AND.
///
/// Both rules must pass for the combined rule to succeed. The violation of
/// the first failing rule is returned; the second rule is not evaluated
/// after a failure (short-circuits).
///
/// # Type Parameters
///
/// * `L` - The left (first) rule type
/// * `R` - The right (second) rule type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
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

impl<L, R> Rule for And<L, R>
where
    L: Rule,
    R: Rule<Value = L::Value>,
{
    type Value = L::Value;

    fn evaluate(&self, value: &Self::Value) -> Outcome {
        self.left.evaluate(value)?;
        self.right.evaluate(value)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two rules.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Rule,
    R: Rule<Value = L::Value>,
{
    And::new(left, right)
}

/// Creates an [`AndAll`] combinator from a vector of rules.
///
/// Useful when the number of rules is only known at runtime.
///
/// # Examples
///
/// ```rust,ignore
/// use roster_validator::combinators::and_all;
///
/// let rules = vec![min_length(3), min_length(5)];
/// let rule = and_all(rules);
/// assert!(rule.evaluate("hello").is_ok());
/// assert!(rule.evaluate("hey").is_err());
/// ```
#[must_use]
pub fn and_all<R>(rules: Vec<R>) -> AndAll<R>
where
    R: Rule,
{
    AndAll { rules }
}

/// Combines multiple rules with logical AND.
///
/// All rules in the collection must pass. Evaluation stops at the first
/// violation (short-circuits).
#[derive(Debug, Clone)]
pub struct AndAll<R> {
    rules: Vec<R>,
}

impl<R> Rule for AndAll<R>
where
    R: Rule,
{
    type Value = R::Value;

    fn evaluate(&self, value: &Self::Value) -> Outcome {
        for rule in &self.rules {
            rule.evaluate(value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{RuleExt, Violation};

    struct MinLength {
        min: usize,
    }

    impl Rule for MinLength {
        type Value = str;
        fn evaluate(&self, value: &str) -> Outcome {
            if value.len() >= self.min {
                Ok(())
            } else {
                Err(Violation::new("min_length"))
            }
        }
    }

    struct MaxLength {
        max: usize,
    }

    impl Rule for MaxLength {
        type Value = str;
        fn evaluate(&self, value: &str) -> Outcome {
            if value.len() <= self.max {
                Ok(())
            } else {
                Err(Violation::new("max_length"))
            }
        }
    }

    #[test]
    fn both_pass() {
        let rule = And::new(MinLength { min: 2 }, MaxLength { max: 10 });
        assert!(rule.evaluate("hello").is_ok());
    }

    #[test]
    fn left_violation_wins() {
        let rule = And::new(MinLength { min: 5 }, MaxLength { max: 3 });
        let violation = rule.evaluate("hey").unwrap_err();
        assert_eq!(violation.code(), "min_length");
    }

    #[test]
    fn chains() {
        let rule = MinLength { min: 2 }
            .and(MaxLength { max: 10 })
            .and(MinLength { min: 3 });
        assert!(rule.evaluate("hello").is_ok());
        assert!(rule.evaluate("hi").is_err());
    }

    #[test]
    fn and_all_short_circuits() {
        let rules = vec![
            MinLength { min: 3 },
            MinLength { min: 5 },
            MinLength { min: 7 },
        ];
        let combined = and_all(rules);
        assert!(combined.evaluate("helloworld").is_ok());
        assert!(combined.evaluate("hello").is_err());
    }
}
