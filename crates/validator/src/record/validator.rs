//! Record-level validator: field bindings and aggregate evaluation

use std::borrow::Cow;

use thiserror::Error;

use crate::record::result::{Failure, ValidationResult};
use crate::record::rule_set::{Mode, RuleSet};

// ============================================================================
// BUILD ERROR
// ============================================================================

/// Configuration error raised while building a [`Validator`].
///
/// A malformed configuration is a programming error, surfaced at
/// construction time so callers fail fast at startup — never during
/// [`Validator::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The builder holds no field bindings at all.
    #[error("validator has no field bindings")]
    NoFields,
    /// The same field name was bound twice.
    #[error("field `{0}` is bound more than once")]
    DuplicateField(String),
    /// A field was bound with an empty rule set.
    #[error("field `{0}` has no rules")]
    EmptyRuleSet(String),
}

// ============================================================================
// FIELD BINDING
// ============================================================================

// One (name, accessor, rule set) binding, type-erased so a single validator
// can mix field value types.
struct FieldBinding<R> {
    name: Cow<'static, str>,
    mode: Mode,
    rule_count: usize,
    evaluate: Box<dyn Fn(&R) -> Vec<crate::foundation::Violation> + Send + Sync>,
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Composes per-field rule sets across one record type.
///
/// Built once via [`Validator::builder`], then reused for any number of
/// [`validate`](Validator::validate) calls. Bindings are fixed at
/// construction; changing the rules means building a new validator.
///
/// All fields are always checked in declaration order — there is no
/// short-circuiting *across* fields, only within a
/// [`RuleSet`](crate::record::RuleSet) that asks for it.
///
/// A validator holds no mutable state, so a single instance (for example
/// behind an `Arc`) serves concurrent callers without locking.
///
/// # Examples
///
/// ```rust,ignore
/// let validator = Validator::builder()
///     .field("FirstName", |d: &Developer| d.first_name(), first_name_rules)
///     .field("Email", |d: &Developer| d.email(), email_rules)
///     .build()?;
///
/// let result = validator.validate(&developer);
/// ```
pub struct Validator<R> {
    fields: Vec<FieldBinding<R>>,
}

impl<R> Validator<R> {
    /// Starts a builder with no bindings.
    #[must_use]
    pub fn builder() -> ValidatorBuilder<R> {
        ValidatorBuilder {
            fields: Vec::new(),
        }
    }

    /// Returns the bound field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|binding| binding.name.as_ref())
    }

    /// Returns the failure-handling mode a field was bound with.
    #[must_use]
    pub fn field_mode(&self, field: &str) -> Option<Mode> {
        self.fields
            .iter()
            .find(|binding| binding.name == field)
            .map(|binding| binding.mode)
    }

    /// Validates a record against every field binding.
    ///
    /// Deterministic and side-effect free: the same record always yields
    /// the same [`ValidationResult`], and the result is owned by the
    /// caller.
    #[must_use = "validation result must be checked"]
    pub fn validate(&self, record: &R) -> ValidationResult {
        let mut failures = Vec::new();

        for binding in &self.fields {
            for violation in (binding.evaluate)(record) {
                failures.push(Failure::new(binding.name.clone(), violation.code));
            }
        }

        ValidationResult::from_failures(failures)
    }
}

impl<R> std::fmt::Debug for Validator<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("fields", &self.fields.iter().map(|b| &b.name).collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Validator`]: collects `(field, accessor, rules)` bindings
/// in declaration order, then verifies the configuration on
/// [`build`](ValidatorBuilder::build).
pub struct ValidatorBuilder<R> {
    fields: Vec<FieldBinding<R>>,
}

impl<R> ValidatorBuilder<R> {
    /// Binds a rule set to a field.
    ///
    /// `name` is the field's declared name as it should appear in
    /// failures. `accessor` extracts the field value from the record; an
    /// accessor for an optional field decides its missing-value policy
    /// (typically normalizing `None` to `""` so the presence rule fails
    /// it and, under short-circuit, nothing else runs).
    #[must_use = "builder methods must be chained or built"]
    pub fn field<V, F>(
        mut self,
        name: impl Into<Cow<'static, str>>,
        accessor: F,
        rules: RuleSet<V>,
    ) -> Self
    where
        V: ?Sized + 'static,
        F: Fn(&R) -> &V + Send + Sync + 'static,
    {
        let rule_count = rules.len();
        let mode = rules.mode();
        self.fields.push(FieldBinding {
            name: name.into(),
            mode,
            rule_count,
            evaluate: Box::new(move |record| rules.evaluate(accessor(record))),
        });
        self
    }

    /// Verifies the configuration and produces the validator.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] when the configuration is malformed: no
    /// bindings, a duplicate field name, or a field without rules.
    pub fn build(self) -> Result<Validator<R>, BuildError> {
        if self.fields.is_empty() {
            return Err(BuildError::NoFields);
        }

        for (i, binding) in self.fields.iter().enumerate() {
            if binding.rule_count == 0 {
                return Err(BuildError::EmptyRuleSet(binding.name.to_string()));
            }
            if self.fields[..i].iter().any(|prior| prior.name == binding.name) {
                return Err(BuildError::DuplicateField(binding.name.to_string()));
            }
        }

        Ok(Validator {
            fields: self.fields,
        })
    }
}

impl<R> Default for ValidatorBuilder<R> {
    fn default() -> Self {
        Validator::builder()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::RuleExt;
    use crate::record::rule_set::Mode;
    use crate::rules::{alphabetic, email, length_between, not_empty};

    struct Developer {
        first_name: Option<String>,
        email: Option<String>,
    }

    fn developer_validator(mode: Mode) -> Validator<Developer> {
        Validator::builder()
            .field(
                "FirstName",
                |d: &Developer| d.first_name.as_deref().unwrap_or(""),
                RuleSet::new(mode)
                    .rule(not_empty().with_code("required_first_name"))
                    .rule(
                        length_between(2, 10)
                            .unwrap()
                            .with_code("first_name_length_should_be_between_2_and_10"),
                    )
                    .rule(alphabetic().with_code("first_name_should_be_characters_only")),
            )
            .field(
                "Email",
                |d: &Developer| d.email.as_deref().unwrap_or(""),
                RuleSet::new(mode).rule(email().with_code("email_invalid_email")),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn valid_record_passes() {
        let validator = developer_validator(Mode::ShortCircuit);
        let result = validator.validate(&Developer {
            first_name: Some("Al".into()),
            email: Some("al@example.com".into()),
        });
        assert!(result.is_valid());
        assert_eq!(result, ValidationResult::valid());
    }

    #[test]
    fn all_fields_are_always_checked() {
        // a FirstName failure must not suppress the Email check
        let validator = developer_validator(Mode::ShortCircuit);
        let result = validator.validate(&Developer {
            first_name: Some("".into()),
            email: Some("bad".into()),
        });

        assert_eq!(
            result,
            ValidationResult::from_failures(vec![
                Failure::new("FirstName", "required_first_name"),
                Failure::new("Email", "email_invalid_email"),
            ])
        );
    }

    #[test]
    fn missing_field_is_treated_as_empty() {
        let validator = developer_validator(Mode::ShortCircuit);
        let result = validator.validate(&Developer {
            first_name: None,
            email: Some("al@example.com".into()),
        });

        assert_eq!(
            result.failures(),
            &[Failure::new("FirstName", "required_first_name")]
        );
    }

    #[test]
    fn declaration_order_is_preserved() {
        let validator = developer_validator(Mode::Accumulate);
        let result = validator.validate(&Developer {
            first_name: Some("4".into()),
            email: Some("nope".into()),
        });

        let codes: Vec<_> = result.failures().iter().map(Failure::code).collect();
        assert_eq!(
            codes,
            vec![
                "first_name_length_should_be_between_2_and_10",
                "first_name_should_be_characters_only",
                "email_invalid_email",
            ]
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let validator = developer_validator(Mode::ShortCircuit);
        let record = Developer {
            first_name: Some("Al".into()),
            email: Some("bad".into()),
        };
        assert_eq!(validator.validate(&record), validator.validate(&record));
    }

    #[test]
    fn build_rejects_no_fields() {
        let result = Validator::<Developer>::builder().build();
        assert_eq!(result.unwrap_err(), BuildError::NoFields);
    }

    #[test]
    fn build_rejects_duplicate_field() {
        let result = Validator::builder()
            .field(
                "Email",
                |d: &Developer| d.email.as_deref().unwrap_or(""),
                RuleSet::short_circuit().rule(email()),
            )
            .field(
                "Email",
                |d: &Developer| d.email.as_deref().unwrap_or(""),
                RuleSet::short_circuit().rule(not_empty()),
            )
            .build();
        assert_eq!(result.unwrap_err(), BuildError::DuplicateField("Email".into()));
    }

    #[test]
    fn build_rejects_empty_rule_set() {
        let result = Validator::builder()
            .field(
                "Email",
                |d: &Developer| d.email.as_deref().unwrap_or(""),
                RuleSet::short_circuit(),
            )
            .build();
        assert_eq!(result.unwrap_err(), BuildError::EmptyRuleSet("Email".into()));
    }

    #[test]
    fn validator_is_shareable_across_threads() {
        let validator = std::sync::Arc::new(developer_validator(Mode::ShortCircuit));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let validator = std::sync::Arc::clone(&validator);
                std::thread::spawn(move || {
                    let result = validator.validate(&Developer {
                        first_name: Some("Al".into()),
                        email: Some("al@example.com".into()),
                    });
                    assert!(result.is_valid());
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn field_names_in_order() {
        let validator = developer_validator(Mode::ShortCircuit);
        let names: Vec<_> = validator.field_names().collect();
        assert_eq!(names, vec!["FirstName", "Email"]);
    }

    #[test]
    fn field_modes_are_exposed() {
        let validator = developer_validator(Mode::Accumulate);
        assert_eq!(validator.field_mode("FirstName"), Some(Mode::Accumulate));
        assert_eq!(validator.field_mode("Unknown"), None);
    }
}
