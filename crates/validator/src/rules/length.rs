//! String presence and length rules
//!
//! By default, length is measured in Unicode scalar values (chars).
//! Use the `.bytes()` constructors for byte-length counting when the input
//! is known to be ASCII and performance matters.

use thiserror::Error;

use crate::foundation::Violation;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    fn measure(self, value: &str) -> usize {
        match self {
            LengthMode::Bytes => value.len(),
            LengthMode::Chars => value.chars().count(),
        }
    }
}

// ============================================================================
// INVALID BOUNDS
// ============================================================================

/// Configuration error for length rules whose bounds are inverted.
///
/// Surfaced at construction time, not at evaluation time: a malformed rule
/// configuration is a programming error and callers fail fast on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid length bounds: min {min} is greater than max {max}")]
pub struct InvalidBounds {
    /// The configured lower bound.
    pub min: usize,
    /// The configured upper bound.
    pub max: usize,
}

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::rule! {
    /// Fails on empty or whitespace-only input.
    ///
    /// Empty-string behavior: fails (that is the point of the rule).
    pub NotEmpty for str;
    check(value) { !value.trim().is_empty() }
    fail(value) { Violation::new("not_empty") }
    fn not_empty();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::rule! {
    /// Fails when the input is shorter than a minimum length.
    ///
    /// Empty-string behavior: fails whenever `min > 0`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for str;
    check(self, value) { self.mode.measure(value) >= self.min }
    fail(self, value) {
        Violation::new("min_length")
            .with_param("min", self.min.to_string())
            .with_param("actual", self.mode.measure(value).to_string())
    }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
    fn min_length(min: usize);
}

impl MinLength {
    /// Creates a minimum length rule that counts bytes.
    #[must_use]
    pub fn bytes(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::rule! {
    /// Fails when the input exceeds a maximum length.
    ///
    /// Empty-string behavior: passes (zero is never above the cap).
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, mode: LengthMode } for str;
    check(self, value) { self.mode.measure(value) <= self.max }
    fail(self, value) {
        Violation::new("max_length")
            .with_param("max", self.max.to_string())
            .with_param("actual", self.mode.measure(value).to_string())
    }
    new(max: usize) { Self { max, mode: LengthMode::Chars } }
    fn max_length(max: usize);
}

impl MaxLength {
    /// Creates a maximum length rule that counts bytes.
    #[must_use]
    pub fn bytes(max: usize) -> Self {
        Self {
            max,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// LENGTH BETWEEN
// ============================================================================

crate::rule! {
    /// Fails when the input length falls outside `[min, max]` (inclusive).
    ///
    /// More efficient than `min_length(..).and(max_length(..))` and reports
    /// a single code. Construction rejects `min > max`.
    ///
    /// Empty-string behavior: fails whenever `min > 0`.
    pub LengthBetween { min: usize, max: usize, mode: LengthMode } for str;
    check(self, value) {
        let len = self.mode.measure(value);
        len >= self.min && len <= self.max
    }
    fail(self, value) {
        Violation::new("length_between")
            .with_param("min", self.min.to_string())
            .with_param("max", self.max.to_string())
            .with_param("actual", self.mode.measure(value).to_string())
    }
    new(min: usize, max: usize) -> InvalidBounds {
        if min > max {
            return Err(InvalidBounds { min, max });
        }
        Ok(Self { min, max, mode: LengthMode::Chars })
    }
    fn length_between(min: usize, max: usize) -> InvalidBounds;
}

impl LengthBetween {
    /// Creates a length range rule that counts bytes.
    ///
    /// Returns an error if `min > max`.
    pub fn bytes(min: usize, max: usize) -> Result<Self, InvalidBounds> {
        if min > max {
            return Err(InvalidBounds { min, max });
        }
        Ok(Self {
            min,
            max,
            mode: LengthMode::Bytes,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
