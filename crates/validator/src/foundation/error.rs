//! Violation type for validation failures
//!
//! A failing rule yields a [`Violation`]: a stable snake_case code plus
//! ordered parameters. Violations are expected data — invalid input is the
//! normal case being tested, not an error condition — so nothing here is
//! ever thrown across the engine boundary.
//!
//! Codes (and params) are meant for a client-side localization layer; the
//! engine renders no human-readable messages. String fields use
//! `Cow<'static, str>` for zero-allocation in the common case of static
//! codes.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

/// The outcome of evaluating a single rule: pass, or fail with a violation.
pub type Outcome = Result<(), Violation>;

// ============================================================================
// VIOLATION
// ============================================================================

/// A single rule failure: a stable code plus optional parameters.
///
/// # Examples
///
/// ## Bare code
///
/// ```rust,ignore
/// use roster_validator::foundation::Violation;
///
/// let violation = Violation::new("not_empty");
/// ```
///
/// ## Code with parameters
///
/// ```rust,ignore
/// let violation = Violation::new("length_between")
///     .with_param("min", "2")
///     .with_param("max", "10")
///     .with_param("actual", "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Stable snake_case code for programmatic handling and i18n.
    ///
    /// Examples: "not_empty", "length_between", "email_format"
    pub code: Cow<'static, str>,

    /// Parameters for the client-side message template.
    ///
    /// Stored as ordered key-value pairs (typically 0-3 params).
    /// Example: `[("min", "2"), ("max", "10"), ("actual", "1")]`
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,
}

impl Violation {
    /// Creates a new violation with a code.
    ///
    /// ```rust,ignore
    /// // Static strings — zero allocation:
    /// let violation = Violation::new("not_empty");
    ///
    /// // Dynamic strings — allocates only when needed:
    /// let violation = Violation::new(format!("custom_{kind}"));
    /// ```
    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            params: SmallVec::new(),
        }
    }

    /// Returns the violation code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Adds a parameter to the violation.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the code, keeping the parameters.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)?;

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for Violation {}

// ============================================================================
// TESTS
// ============================================================================
