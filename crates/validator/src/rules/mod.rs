//! Built-in rules
//!
//! Ready-to-use checks for common field constraints. Every rule here ships a
//! generic default code (`not_empty`, `length_between`, ...); record
//! validators rename them per field via
//! [`RuleExt::with_code`](crate::foundation::RuleExt::with_code).
//!
//! Each rule documents its behavior on the empty string, because callers
//! that normalize a missing field to `""` rely on it: [`NotEmpty`] fails,
//! [`LengthBetween`] fails whenever `min > 0`, [`CharactersOnly`] vacuously
//! passes, and [`Email`] fails.
//!
//! # Examples
//!
//! ```rust,ignore
//! use roster_validator::prelude::*;
//!
//! let first_name = not_empty().and(length_between(2, 10)?).and(alphabetic());
//! let contact = email();
//! ```

pub mod characters;
pub mod content;
pub mod length;

pub use characters::{CharactersOnly, alphabetic, alphanumeric, characters_only, digits};
pub use content::{Email, email};
pub use length::{
    InvalidBounds, LengthBetween, LengthMode, MaxLength, MinLength, NotEmpty, length_between,
    max_length, min_length, not_empty,
};
