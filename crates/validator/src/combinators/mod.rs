//! Rule combinators
//!
//! Combinators compose rules into richer checks without giving up static
//! typing: [`And`] chains (short-circuit conjunction), [`Or`] alternatives,
//! [`Not`] inversion, [`When`]/[`Unless`] conditional evaluation, and
//! [`WithCode`] failure-code overrides.
//!
//! # Examples
//!
//! ```rust,ignore
//! use roster_validator::prelude::*;
//!
//! let first_name = not_empty()
//!     .and(length_between(2, 10)?)
//!     .and(alphabetic())
//!     .with_code("invalid_first_name");
//! ```

pub mod and;
pub mod code;
pub mod not;
pub mod or;
pub mod unless;
pub mod when;

pub use and::{And, AndAll, and, and_all};
pub use code::{WithCode, with_code};
pub use not::{Not, not};
pub use or::{Or, or};
pub use unless::{Unless, unless};
pub use when::{When, when};
