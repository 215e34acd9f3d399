//! Record validation: rule sets, field bindings, and aggregate results
//!
//! This module is the aggregation layer above individual rules:
//!
//! - [`RuleSet`]: an ordered sequence of rules bound to one field value
//!   type, evaluated in [`Mode::ShortCircuit`] or [`Mode::Accumulate`].
//! - [`Validator`]: composes rule sets across all fields of one record
//!   type; built once via [`ValidatorBuilder`], reused across calls, and
//!   safe to share between threads (nothing mutates after construction).
//! - [`ValidationResult`]: the outcome — overall pass/fail plus an ordered
//!   list of [`Failure`] `(field, code)` pairs in declaration order.
//!
//! # Examples
//!
//! ```rust,ignore
//! use roster_validator::prelude::*;
//!
//! struct Developer {
//!     first_name: Option<String>,
//!     email: Option<String>,
//! }
//!
//! let validator = Validator::builder()
//!     .field(
//!         "FirstName",
//!         |d: &Developer| d.first_name.as_deref().unwrap_or(""),
//!         RuleSet::short_circuit()
//!             .rule(not_empty().with_code("required_first_name"))
//!             .rule(length_between(2, 10)?.with_code("first_name_length_should_be_between_2_and_10"))
//!             .rule(alphabetic().with_code("first_name_should_be_characters_only")),
//!     )
//!     .field(
//!         "Email",
//!         |d: &Developer| d.email.as_deref().unwrap_or(""),
//!         RuleSet::short_circuit().rule(email().with_code("email_invalid_email")),
//!     )
//!     .build()?;
//!
//! let result = validator.validate(&developer);
//! if !result.is_valid() {
//!     for failure in result.failures() {
//!         // (field, code) pairs in declaration order
//!     }
//! }
//! ```

pub mod result;
pub mod rule_set;
pub mod validator;

pub use result::{Failure, ValidationResult};
pub use rule_set::{Mode, RuleSet};
pub use validator::{BuildError, Validator, ValidatorBuilder};
