//! UNLESS combinator - inverse conditional evaluation

use crate::foundation::{Outcome, Rule};

// ============================================================================
// UNLESS COMBINATOR
// ============================================================================

/// Conditionally skips a rule when a predicate is true.
///
/// This is the inverse of [`When`](crate::combinators::When) - the rule runs
/// only when the condition is false.
///
/// # Examples
///
/// ```rust,ignore
/// use roster_validator::combinators::Unless;
/// use roster_validator::foundation::Rule;
///
/// // Legacy single-letter handles are grandfathered in
/// let rule = Unless::new(length_between(2, 10)?, |s: &str| s.len() == 1);
/// assert!(rule.evaluate("X").is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Unless<R, C> {
    rule: R,
    condition: C,
}

impl<R, C> Unless<R, C> {
    /// Creates a new UNLESS combinator.
    ///
    /// Evaluation is skipped when `condition` returns true.
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

impl<R, C> Rule for Unless<R, C>
where
    R: Rule,
    C: Fn(&R::Value) -> bool,
{
    type Value = R::Value;

    fn evaluate(&self, value: &Self::Value) -> Outcome {
        if (self.condition)(value) {
            Ok(())
        } else {
            self.rule.evaluate(value)
        }
    }
}

/// Creates an UNLESS combinator.
///
/// Evaluation is skipped when `condition` returns true.
pub fn unless<R, C>(rule: R, condition: C) -> Unless<R, C>
where
    R: Rule,
    C: Fn(&R::Value) -> bool,
{
    Unless::new(rule, condition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Violation;

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

    #[test]
    fn skipped_when_condition_true() {
        let rule = Unless::new(MinLength { min: 5 }, |s: &str| s.is_empty());
        assert!(rule.evaluate("").is_ok());
    }

    #[test]
    fn evaluated_when_condition_false() {
        let rule = unless(MinLength { min: 5 }, |s: &str| s.is_empty());
        assert!(rule.evaluate("hi").is_err());
        assert!(rule.evaluate("hello").is_ok());
    }
}
