//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the engine:
//!
//! - **Traits**: [`Rule`], [`RuleExt`]
//! - **Outcomes**: [`Violation`], [`Outcome`]
//!
//! # Architecture
//!
//! Rules are generic over their input type, providing compile-time
//! guarantees:
//!
//! ```rust,ignore
//! use roster_validator::foundation::{Outcome, Rule, Violation};
//!
//! struct MinLength { min: usize }
//!
//! impl Rule for MinLength {
//!     type Value = str;  // only evaluates strings
//!
//!     fn evaluate(&self, value: &str) -> Outcome {
//!         // ...
//!     }
//! }
//! ```
//!
//! Rules compose using logical combinators, and a failing rule produces a
//! [`Violation`] — expected, recoverable-by-the-caller data, never a panic:
//!
//! ```rust,ignore
//! let rule = not_empty().and(length_between(2, 10)?);
//! ```

pub mod error;
pub mod traits;

pub use error::{Outcome, Violation};
pub use traits::{Rule, RuleExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Evaluates a value against every rule in a slice, collecting all violations.
///
/// This is the accumulate building block: every rule runs regardless of
/// earlier failures.
///
/// # Examples
///
/// ```rust,ignore
/// use roster_validator::foundation::evaluate_all;
///
/// let violations = evaluate_all("x!", &[&not_empty(), &alphabetic()]);
/// assert_eq!(violations.len(), 1);
/// ```
pub fn evaluate_all<R>(value: &R::Value, rules: &[&R]) -> Vec<Violation>
where
    R: Rule + ?Sized,
{
    rules
        .iter()
        .filter_map(|rule| rule.evaluate(value).err())
        .collect()
}

/// Evaluates a value against rules in order, stopping at the first violation.
///
/// This is the short-circuit building block: a failing rule suppresses every
/// rule after it.
pub fn evaluate_until_violation<R>(value: &R::Value, rules: &[&R]) -> Option<Violation>
where
    R: Rule + ?Sized,
{
    rules.iter().find_map(|rule| rule.evaluate(value).err())
}

// ============================================================================
// TESTS
// ============================================================================
