//! Macros for creating rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`] — Create a complete rule (struct + Rule impl + factory fn)
//! - [`compose!`] — AND-chain multiple rules
//! - [`any_of!`] — OR-chain multiple rules
//!
//! # Examples
//!
//! ```rust,ignore
//! use roster_validator::rule;
//! use roster_validator::foundation::{Rule, Violation};
//!
//! // Unit rule (no fields)
//! rule! {
//!     pub NotEmpty for str;
//!     check(value) { !value.trim().is_empty() }
//!     fail(value) { Violation::new("not_empty") }
//!     fn not_empty();
//! }
//!
//! // Struct with fields
//! rule! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MinLength { min: usize } for str;
//!     check(self, value) { value.chars().count() >= self.min }
//!     fail(self, value) {
//!         Violation::new("min_length").with_param("min", self.min.to_string())
//!     }
//!     fn min_length(min: usize);
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete rule: struct definition, [`Rule`](crate::foundation::Rule)
/// implementation, constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub NotEmpty for str;
///     check(value) { !value.trim().is_empty() }
///     fail(value) { Violation::new("not_empty") }
///     fn not_empty();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// rule! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MinLength { min: usize } for str;
///     check(self, value) { value.chars().count() >= self.min }
///     fail(self, value) { Violation::new("min_length") }
///     fn min_length(min: usize);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// rule! {
///     pub MaxLength { max: usize, mode: LengthMode } for str;
///     check(self, value) { self.mode.measure(value) <= self.max }
///     fail(self, value) { Violation::new("max_length") }
///     new(max: usize) { Self { max, mode: LengthMode::Chars } }
///     fn max_length(max: usize);
/// }
/// ```
///
/// **Fallible constructor** (for configuration that can be malformed; the
/// type after `->` is the error type, and construction fails fast):
/// ```rust,ignore
/// rule! {
///     pub LengthBetween { min: usize, max: usize } for str;
///     check(self, value) { /* ... */ }
///     fail(self, value) { /* ... */ }
///     new(min: usize, max: usize) -> InvalidBounds {
///         if min > max { return Err(InvalidBounds { min, max }); }
///         Ok(Self { min, max })
///     }
///     fn length_between(min: usize, max: usize) -> InvalidBounds;
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1a: Unit rule (no fields) + factory fn ───────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $value:ty;
        check($inp:ident) $check:block
        fail($finp:ident) $fail:block
        fn $factory:ident();
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name for $value;
            check($inp) $check
            fail($finp) $fail
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit rule (no fields), no factory ────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $value:ty;
        check($inp:ident) $check:block
        fail($finp:ident) $fail:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            type Value = $value;

            #[allow(unused_variables)]
            fn evaluate(&self, $inp: &Self::Value) -> $crate::foundation::Outcome {
                if $check {
                    Ok(())
                } else {
                    let $finp = $inp;
                    Err($fail)
                }
            }
        }
    };

    // ── Variant 2a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $value:ty;
        check($self_:ident, $inp:ident) $check:block
        fail($self2:ident, $finp:ident) $fail:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $value;
            check($self_, $inp) $check
            fail($self2, $finp) $fail
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $value:ty;
        check($self_:ident, $inp:ident) $check:block
        fail($self2:ident, $finp:ident) $fail:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Rule for $name {
            type Value = $value;

            #[allow(unused_variables)]
            fn evaluate(&$self_, $inp: &Self::Value) -> $crate::foundation::Outcome {
                if $check {
                    Ok(())
                } else {
                    let $finp = $inp;
                    Err($fail)
                }
            }
        }
    };

    // ── Variant 2c: Struct with fields + fallible new + fallible factory ─
    //
    // For rules whose configuration can be malformed (returns Result).
    // The type after `->` is the error type; the macro wraps it in Result.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $value:ty;
        check($self_:ident, $inp:ident) $check:block
        fail($self2:ident, $finp:ident) $fail:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        impl $crate::foundation::Rule for $name {
            type Value = $value;

            #[allow(unused_variables)]
            fn evaluate(&$self_, $inp: &Self::Value) -> $crate::foundation::Outcome {
                if $check {
                    Ok(())
                } else {
                    let $finp = $inp;
                    Err($fail)
                }
            }
        }

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $value:ty;
        check($self_:ident, $inp:ident) $check:block
        fail($self2:ident, $finp:ident) $fail:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $value;
            check($self_, $inp) $check
            fail($self2, $finp) $fail
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $value:ty;
        check($self_:ident, $inp:ident) $check:block
        fail($self2:ident, $finp:ident) $fail:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Rule for $name {
            type Value = $value;

            #[allow(unused_variables)]
            fn evaluate(&$self_, $inp: &Self::Value) -> $crate::foundation::Outcome {
                if $check {
                    Ok(())
                } else {
                    let $finp = $inp;
                    Err($fail)
                }
            }
        }
    };
}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes multiple rules using AND logic.
///
/// ```rust,ignore
/// let rule = compose![not_empty(), length_between(2, 10)?, alphabetic()];
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// Composes multiple rules using OR logic.
///
/// ```rust,ignore
/// let rule = any_of![digits(), alphabetic()];
/// ```
#[macro_export]
macro_rules! any_of {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.or($rest))+
    };
}

// ============================================================================
// TESTS
// ============================================================================
