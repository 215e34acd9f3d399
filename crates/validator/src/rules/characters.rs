//! Per-character predicate rules
//!
//! [`CharactersOnly`] checks every character of the input against a
//! predicate. The empty string passes vacuously (`all()` over an empty
//! iterator is true); pair with [`NotEmpty`](crate::rules::NotEmpty) when
//! presence is also required.

use crate::foundation::{Outcome, Rule, Violation};

// ============================================================================
// CHARACTERS ONLY
// ============================================================================

/// Fails when any character of the input fails the predicate.
///
/// Generic over the predicate, so one type covers alphabetic-only,
/// digits-only, and any custom character class. The violation carries the
/// first offending character as the `found` param.
///
/// Empty-string behavior: passes vacuously.
///
/// # Examples
///
/// ```rust,ignore
/// use roster_validator::rules::characters_only;
/// use roster_validator::foundation::Rule;
///
/// let rule = characters_only(char::is_alphabetic);
/// assert!(rule.evaluate("Ada").is_ok());
/// assert!(rule.evaluate("Ada99").is_err());
/// assert!(rule.evaluate("").is_ok()); // vacuous
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CharactersOnly<P> {
    predicate: P,
    code: &'static str,
}

impl<P> CharactersOnly<P>
where
    P: Fn(char) -> bool,
{
    /// Creates a rule with the default `characters_only` code.
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            code: "characters_only",
        }
    }

    /// Creates a rule with a named character class code.
    pub fn with_class(predicate: P, code: &'static str) -> Self {
        Self { predicate, code }
    }
}

impl<P> Rule for CharactersOnly<P>
where
    P: Fn(char) -> bool,
{
    type Value = str;

    fn evaluate(&self, value: &Self::Value) -> Outcome {
        match value.chars().find(|c| !(self.predicate)(*c)) {
            None => Ok(()),
            Some(ch) => Err(Violation::new(self.code).with_param("found", ch.to_string())),
        }
    }
}

// ============================================================================
// FACTORY FUNCTIONS
// ============================================================================

/// Creates a rule that requires every character to satisfy the predicate.
pub fn characters_only<P>(predicate: P) -> CharactersOnly<P>
where
    P: Fn(char) -> bool,
{
    CharactersOnly::new(predicate)
}

/// Requires every character to be alphabetic. Code: `alphabetic`.
#[must_use]
pub fn alphabetic() -> CharactersOnly<fn(char) -> bool> {
    let predicate: fn(char) -> bool = char::is_alphabetic;
    CharactersOnly::with_class(predicate, "alphabetic")
}

/// Requires every character to be alphanumeric. Code: `alphanumeric`.
#[must_use]
pub fn alphanumeric() -> CharactersOnly<fn(char) -> bool> {
    let predicate: fn(char) -> bool = char::is_alphanumeric;
    CharactersOnly::with_class(predicate, "alphanumeric")
}

/// Requires every character to be an ASCII digit. Code: `digits`.
#[must_use]
pub fn digits() -> CharactersOnly<fn(char) -> bool> {
    let predicate: fn(char) -> bool = |c| c.is_ascii_digit();
    CharactersOnly::with_class(predicate, "digits")
}

// ============================================================================
// TESTS
// ============================================================================
