//! Aggregate validation outcome

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

// ============================================================================
// FAILURE
// ============================================================================

/// One field-level failure: the field's declared name plus the stable
/// violation code.
///
/// The code (not a rendered message) is the contract with clients: a
/// localization layer on their side turns `required_first_name` into prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// The field name as declared on the validator (e.g. `FirstName`).
    pub field: Cow<'static, str>,
    /// The stable snake_case failure code (e.g. `required_first_name`).
    pub code: Cow<'static, str>,
}

impl Failure {
    /// Creates a failure from a field name and code.
    pub fn new(field: impl Into<Cow<'static, str>>, code: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the failure code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.code)
    }
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// The outcome of validating one record.
///
/// A plain data carrier: overall pass/fail plus the ordered `(field, code)`
/// failure list, in field- then rule-declaration order. Constructed fresh
/// per [`Validator::validate`](crate::record::Validator::validate) call and
/// owned by the caller.
///
/// The invariant `is_valid() == failures().is_empty()` holds by
/// construction — the verdict is derived, never stored.
///
/// Two results with the same ordered failures are equal, so tests can
/// compare them directly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    failures: Vec<Failure>,
}

impl ValidationResult {
    /// Creates a passing result.
    #[must_use]
    pub fn valid() -> Self {
        Self::default()
    }

    /// Creates a result from collected failures (empty means valid).
    #[must_use]
    pub fn from_failures(failures: Vec<Failure>) -> Self {
        Self { failures }
    }

    /// Returns true when no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the failures in declaration order.
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Consumes the result, returning the failures.
    #[must_use]
    pub fn into_failures(self) -> Vec<Failure> {
        self.failures
    }

    /// Returns the failures recorded for one field.
    pub fn failures_for(&self, field: &str) -> impl Iterator<Item = &Failure> {
        self.failures.iter().filter(move |f| f.field == field)
    }
}

impl FromIterator<Failure> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = Failure>>(iter: I) -> Self {
        Self {
            failures: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "valid");
        }
        writeln!(f, "{} failure(s):", self.failures.len())?;
        for (i, failure) in self.failures.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, failure)?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
