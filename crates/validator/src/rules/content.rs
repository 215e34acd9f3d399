//! String format rules

use std::sync::LazyLock;

use crate::foundation::Violation;

// Grammar: non-empty local part, `@`, domain with at least one dot. The
// character classes exclude whitespace and `@`, so an embedded space or a
// second `@` can never match.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)+$",
    )
    .unwrap()
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::rule! {
    /// Fails when the input is not a plausible email address.
    ///
    /// Accepts `local-part@domain` where the domain contains at least one
    /// dot; rejects embedded whitespace.
    ///
    /// Empty-string behavior: fails (there is no `@`).
    pub Email { pattern: regex::Regex } for str;
    check(self, value) { self.pattern.is_match(value) }
    fail(self, value) { Violation::new("email_format") }
    new() {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
    fn email();
}

// ============================================================================
// TESTS
// ============================================================================
