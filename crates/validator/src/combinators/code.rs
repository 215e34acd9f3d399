//! CODE combinator - failure-code overrides

use crate::foundation::{Outcome, Rule};

// ============================================================================
// WITH CODE COMBINATOR
// ============================================================================

/// Replaces the violation code of a rule, keeping its parameters.
///
/// This is how callers bind field-specific codes onto generic rules: the
/// engine ships `not_empty`, `length_between` and friends, and a record
/// validator renames them to the stable identifiers its clients localize
/// against (`required_first_name`, ...).
///
/// # Examples
///
/// ```rust,ignore
/// use roster_validator::combinators::WithCode;
/// use roster_validator::foundation::Rule;
///
/// let rule = WithCode::new(not_empty(), "required_first_name");
///
/// let violation = rule.evaluate("").unwrap_err();
/// assert_eq!(violation.code(), "required_first_name");
/// ```
#[derive(Debug, Clone)]
pub struct WithCode<R> {
    inner: R,
    code: String,
}

impl<R> WithCode<R> {
    /// Creates a new `WithCode` combinator with an override code.
    pub fn new(inner: R, code: impl Into<String>) -> Self {
        Self {
            inner,
            code: code.into(),
        }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns the override code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> Rule for WithCode<R>
where
    R: Rule,
{
    type Value = R::Value;

    fn evaluate(&self, value: &Self::Value) -> Outcome {
        self.inner
            .evaluate(value)
            .map_err(|violation| violation.with_code(self.code.clone()))
    }
}

/// Creates a combinator that overrides the violation code.
pub fn with_code<R>(rule: R, code: impl Into<String>) -> WithCode<R>
where
    R: Rule,
{
    WithCode::new(rule, code)
}

// ============================================================================
// TESTS
// ============================================================================
