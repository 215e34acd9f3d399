//! Prelude module for convenient imports.
//!
//! Provides a single `use roster_validator::prelude::*;` import that brings
//! in all commonly needed traits, types, rules, and combinators.
//!
//! # Examples
//!
//! ```rust,ignore
//! use roster_validator::prelude::*;
//!
//! let first_name = not_empty().and(length_between(2, 10)?).and(alphabetic());
//! let rules = RuleSet::short_circuit().rule(first_name);
//! ```

// ============================================================================
// FOUNDATION: Core traits and outcome types
// ============================================================================

pub use crate::foundation::{Outcome, Rule, RuleExt, Violation};

// ============================================================================
// RULES: All built-in rules
// ============================================================================

pub use crate::rules::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    And, Not, Or, Unless, When, WithCode, and, and_all, not, or, unless, when, with_code,
};

// ============================================================================
// RECORD: Rule sets, validators, results
// ============================================================================

pub use crate::record::{
    BuildError, Failure, Mode, RuleSet, ValidationResult, Validator, ValidatorBuilder,
};
