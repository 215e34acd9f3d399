//! # roster-validator
//!
//! A composable, rule-based field validation engine.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roster_validator::prelude::*;
//!
//! // Compose rules with .and() / .or() / .not()
//! let first_name = not_empty().and(length_between(2, 10)?).and(alphabetic());
//! assert!(first_name.evaluate("Al").is_ok());
//! ```
//!
//! ## Validating whole records
//!
//! Bind a [`RuleSet`](record::RuleSet) per field on a
//! [`Validator`](record::Validator) and get back an ordered
//! [`ValidationResult`](record::ValidationResult) of `(field, code)` pairs:
//!
//! ```rust,ignore
//! let validator = Validator::builder()
//!     .field("FirstName", |d: &Developer| d.first_name(), RuleSet::short_circuit()
//!         .rule(not_empty().with_code("required_first_name")))
//!     .build()?;
//!
//! let report = validator.validate(&developer);
//! assert!(report.is_valid());
//! ```
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for zero-boilerplate rules, or implement
//! [`Rule`](foundation::Rule) manually for complex cases.
//!
//! Violations are data, not faults: a failing rule yields a
//! [`Violation`](foundation::Violation) carrying a stable snake_case code
//! (plus parameters) for a client-side localization layer. The engine never
//! renders human-readable messages.

// Violation is the fundamental failure type for all rules — boxing it would
// add indirection to every evaluation for no practical benefit.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (And<Or<Not<...>, ...>, ...>) produces complex types
// that are inherent to the type-safe combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod record;
pub mod rules;
