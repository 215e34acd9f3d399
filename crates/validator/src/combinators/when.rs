//! WHEN combinator - conditional evaluation
//!
//! This module provides the [`When`] combinator which conditionally applies
//! a rule based on a predicate. The rule only runs if the condition returns
//! `true`.
//!
//! # Use Cases
//!
//! - Skip format checks for empty strings (presence is another rule's job)
//! - Apply stricter rules only to values that opt into them

use crate::foundation::{Outcome, Rule};

/// Conditionally applies a rule based on a predicate.
///
/// The inner rule only runs if the condition returns `true`. If the
/// condition returns `false`, evaluation passes immediately without running
/// the inner rule.
///
/// # Type Parameters
///
/// * `R` - The inner rule type
/// * `C` - The condition type (`Fn(&Value) -> bool`)
///
/// # Examples
///
/// ```rust,ignore
/// use roster_validator::combinators::When;
/// use roster_validator::foundation::Rule;
///
/// // Only check the format of non-empty values
/// let rule = When::new(email(), |s: &str| !s.is_empty());
/// assert!(rule.evaluate("").is_ok());          // skipped
/// assert!(rule.evaluate("nope").is_err());     // evaluated, fails
/// ```
#[derive(Debug, Clone, Copy)]
pub struct When<R, C> {
    pub(crate) rule: R,
    pub(crate) condition: C,
}

impl<R, C> When<R, C> {
    /// Creates a new `When` combinator.
    ///
    /// The rule runs only when `condition` returns true.
    pub fn new(rule: R, condition: C) -> Self {
        Self { rule, condition }
    }

    /// Returns a reference to the inner rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Returns a reference to the condition.
    pub fn condition(&self) -> &C {
        &self.condition
    }

    /// Extracts the rule and condition.
    pub fn into_parts(self) -> (R, C) {
        (self.rule, self.condition)
    }
}

impl<R, C> Rule for When<R, C>
where
    R: Rule,
    C: Fn(&R::Value) -> bool,
{
    type Value = R::Value;

    fn evaluate(&self, value: &Self::Value) -> Outcome {
        if (self.condition)(value) {
            self.rule.evaluate(value)
        } else {
            Ok(())
        }
    }
}

/// Creates a `When` combinator.
pub fn when<R, C>(rule: R, condition: C) -> When<R, C>
where
    R: Rule,
    C: Fn(&R::Value) -> bool,
{
    When::new(rule, condition)
}
