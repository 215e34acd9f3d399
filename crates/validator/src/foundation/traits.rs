//! Core traits for the validation engine
//!
//! This module defines the fundamental trait every rule implements, plus the
//! extension trait that provides the fluent combinator API.

use crate::foundation::error::Outcome;

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A single named check against one value.
///
/// The trait is generic over the value type, allowing for compile-time type
/// safety while keeping rules reusable across records. Rules are pure
/// functions of their input: no side effects, no I/O, and invalid input is
/// reported as data ([`Violation`](crate::foundation::Violation)), never as
/// a panic.
///
/// # Type Parameters
///
/// * `Value` - The type being evaluated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```rust,ignore
/// use roster_validator::foundation::{Outcome, Rule, Violation};
///
/// struct MinLength {
///     min: usize,
/// }
///
/// impl Rule for MinLength {
///     type Value = str;
///
///     fn evaluate(&self, value: &Self::Value) -> Outcome {
///         if value.chars().count() >= self.min {
///             Ok(())
///         } else {
///             Err(Violation::new("min_length")
///                 .with_param("min", self.min.to_string()))
///         }
///     }
/// }
/// ```
pub trait Rule {
    /// The type of value being evaluated.
    ///
    /// Use `?Sized` to allow evaluation of unsized types like `str` and `[T]`.
    type Value: ?Sized;

    /// Evaluates the value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the check passes
    /// * `Err(Violation)` with a stable failure code otherwise
    fn evaluate(&self, value: &Self::Value) -> Outcome;
}

// Boxed rules evaluate by delegation, so rule sets can hold heterogeneous
// rule types behind one trait object.
impl<V: ?Sized> Rule for Box<dyn Rule<Value = V> + Send + Sync> {
    type Value = V;

    fn evaluate(&self, value: &Self::Value) -> Outcome {
        self.as_ref().evaluate(value)
    }
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for rules.
///
/// This trait is automatically implemented for all types that implement
/// [`Rule`], providing a fluent API for composing checks.
///
/// # Examples
///
/// ```rust,ignore
/// use roster_validator::prelude::*;
///
/// let rule = not_empty()
///     .and(length_between(2, 10)?)
///     .and(alphabetic());
///
/// assert!(rule.evaluate("Al").is_ok());
/// assert!(rule.evaluate("").is_err());
/// ```
pub trait RuleExt: Rule + Sized {
    /// Combines two rules with logical AND.
    ///
    /// Both rules must pass for the combined rule to succeed.
    /// Short-circuits on the first violation.
    ///
    /// ```rust,ignore
    /// let rule = not_empty().and(alphabetic());
    /// assert!(rule.evaluate("Al").is_ok());
    /// assert!(rule.evaluate("").is_err());      // stops at not_empty
    /// assert!(rule.evaluate("A1").is_err());    // fails alphabetic
    /// ```
    fn and<R>(self, other: R) -> And<Self, R>
    where
        R: Rule<Value = Self::Value>,
    {
        And::new(self, other)
    }

    /// Combines two rules with logical OR.
    ///
    /// At least one rule must pass for the combined rule to succeed.
    /// Short-circuits on the first success.
    fn or<R>(self, other: R) -> Or<Self, R>
    where
        R: Rule<Value = Self::Value>,
    {
        Or::new(self, other)
    }

    /// Inverts the rule with logical NOT.
    ///
    /// The combined rule succeeds if the original rule fails, and vice versa.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Makes evaluation conditional on a predicate.
    ///
    /// The rule only runs if the condition returns `true`; otherwise the
    /// check is skipped and passes.
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Value) -> bool,
    {
        When::new(self, condition)
    }

    /// Skips evaluation when a predicate is true.
    ///
    /// The inverse of [`when`](RuleExt::when).
    fn unless<C>(self, condition: C) -> Unless<Self, C>
    where
        C: Fn(&Self::Value) -> bool,
    {
        Unless::new(self, condition)
    }

    /// Overrides the violation code, keeping the parameters.
    ///
    /// This is how record validators bind field-specific codes (for example
    /// `required_first_name`) onto generic rules.
    ///
    /// ```rust,ignore
    /// let rule = not_empty().with_code("required_first_name");
    /// let violation = rule.evaluate("").unwrap_err();
    /// assert_eq!(violation.code(), "required_first_name");
    /// ```
    fn with_code(self, code: impl Into<String>) -> WithCode<Self> {
        WithCode::new(self, code)
    }
}

// Automatically implement RuleExt for all Rule implementations
impl<T: Rule> RuleExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================
// Import the actual combinator implementations instead of duplicating them

pub use crate::combinators::and::And;
pub use crate::combinators::code::WithCode;
pub use crate::combinators::not::Not;
pub use crate::combinators::or::Or;
pub use crate::combinators::unless::Unless;
pub use crate::combinators::when::When;

// ============================================================================
// TESTS
// ============================================================================
