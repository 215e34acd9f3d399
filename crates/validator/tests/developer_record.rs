//! End-to-end record validation scenarios.
//!
//! Exercises the full engine surface — rules, code overrides, rule sets,
//! validator composition — against the developer-intake rule configuration
//! the API ships.

use pretty_assertions::assert_eq;
use rstest::rstest;

use roster_validator::prelude::*;

struct Developer {
    first_name: Option<String>,
    email: Option<String>,
}

impl Developer {
    fn new(first_name: &str, email: &str) -> Self {
        Self {
            first_name: Some(first_name.to_owned()),
            email: Some(email.to_owned()),
        }
    }
}

/// The intake configuration: FirstName chained NotEmpty → LengthBetween →
/// CharactersOnly under short-circuit; Email with a single format rule.
fn developer_validator() -> Validator<Developer> {
    Validator::builder()
        .field(
            "FirstName",
            |d: &Developer| d.first_name.as_deref().unwrap_or(""),
            RuleSet::short_circuit()
                .rule(not_empty().with_code("required_first_name"))
                .rule(
                    length_between(2, 10)
                        .expect("static bounds")
                        .with_code("first_name_length_should_be_between_2_and_10"),
                )
                .rule(alphabetic().with_code("first_name_should_be_characters_only")),
        )
        .field(
            "Email",
            |d: &Developer| d.email.as_deref().unwrap_or(""),
            RuleSet::short_circuit().rule(email().with_code("email_invalid_email")),
        )
        .build()
        .expect("static configuration")
}

#[test]
fn accepts_a_valid_developer() {
    let validator = developer_validator();
    let result = validator.validate(&Developer::new("Al", "al@example.com"));

    assert_eq!(result, ValidationResult::valid());
    assert!(result.is_valid());
    assert!(result.failures().is_empty());
}

#[test]
fn rejects_empty_name_and_bad_email_together() {
    let validator = developer_validator();
    let result = validator.validate(&Developer::new("", "bad"));

    assert_eq!(
        result,
        ValidationResult::from_failures(vec![
            Failure::new("FirstName", "required_first_name"),
            Failure::new("Email", "email_invalid_email"),
        ])
    );
}

#[rstest]
#[case::two_letters("Al")]
#[case::ten_letters("Maximilian")]
#[case::mixed_case("aLiCe")]
#[case::accented("Jos\u{e9}")]
fn accepts_alphabetic_names_within_bounds(#[case] name: &str) {
    let validator = developer_validator();
    let result = validator.validate(&Developer::new(name, "dev@example.com"));
    assert!(result.is_valid(), "expected {name:?} to pass: {result}");
}

#[rstest]
#[case::one_letter("A")]
#[case::eleven_letters("Maximiliano")]
fn rejects_names_outside_length_bounds(#[case] name: &str) {
    let validator = developer_validator();
    let result = validator.validate(&Developer::new(name, "dev@example.com"));

    assert_eq!(
        result.failures(),
        &[Failure::new(
            "FirstName",
            "first_name_length_should_be_between_2_and_10"
        )]
    );
}

#[rstest]
#[case::digit("Al9")]
#[case::symbol("Al-n")]
#[case::space("Al n")]
fn rejects_non_letter_names_within_bounds(#[case] name: &str) {
    // length passes, so the character rule is the one that reports
    let validator = developer_validator();
    let result = validator.validate(&Developer::new(name, "dev@example.com"));

    assert_eq!(
        result.failures(),
        &[Failure::new(
            "FirstName",
            "first_name_should_be_characters_only"
        )]
    );
}

#[test]
fn short_circuit_reports_only_the_first_name_failure() {
    // "" fails NotEmpty and LengthBetween; only the first code appears
    let validator = developer_validator();
    let result = validator.validate(&Developer::new("", "dev@example.com"));

    let first_name: Vec<_> = result.failures_for("FirstName").collect();
    assert_eq!(first_name.len(), 1);
    assert_eq!(first_name[0].code(), "required_first_name");
}

#[test]
fn missing_fields_validate_like_empty_ones() {
    let validator = developer_validator();

    let omitted = validator.validate(&Developer {
        first_name: None,
        email: None,
    });
    let empty = validator.validate(&Developer::new("", ""));

    assert_eq!(omitted, empty);
    assert_eq!(
        omitted,
        ValidationResult::from_failures(vec![
            Failure::new("FirstName", "required_first_name"),
            Failure::new("Email", "email_invalid_email"),
        ])
    );
}

#[rstest]
#[case::plain("a@b.com")]
#[case::subdomain("dev@mail.example.org")]
#[case::plus_tag("dev+roster@example.com")]
fn accepts_valid_emails(#[case] address: &str) {
    let validator = developer_validator();
    let result = validator.validate(&Developer::new("Al", address));
    assert!(result.is_valid(), "expected {address:?} to pass: {result}");
}

#[rstest]
#[case::no_at("not-an-email")]
#[case::no_domain_dot("dev@localhost")]
#[case::embedded_space("d ev@example.com")]
#[case::empty("")]
fn rejects_invalid_emails(#[case] address: &str) {
    let validator = developer_validator();
    let result = validator.validate(&Developer::new("Al", address));

    assert_eq!(
        result.failures(),
        &[Failure::new("Email", "email_invalid_email")]
    );
}

#[test]
fn validation_is_idempotent() {
    let validator = developer_validator();
    let record = Developer::new("", "bad");

    assert_eq!(validator.validate(&record), validator.validate(&record));
}

#[test]
fn accumulate_mode_reports_every_violation_for_a_field() {
    let validator = Validator::builder()
        .field(
            "FirstName",
            |d: &Developer| d.first_name.as_deref().unwrap_or(""),
            RuleSet::accumulate()
                .rule(not_empty().with_code("required_first_name"))
                .rule(
                    length_between(2, 10)
                        .expect("static bounds")
                        .with_code("first_name_length_should_be_between_2_and_10"),
                )
                .rule(alphabetic().with_code("first_name_should_be_characters_only")),
        )
        .build()
        .expect("static configuration");

    // "" fails presence and length; the character rule passes vacuously
    let result = validator.validate(&Developer::new("", "ignored"));
    let codes: Vec<_> = result.failures().iter().map(Failure::code).collect();
    assert_eq!(
        codes,
        vec![
            "required_first_name",
            "first_name_length_should_be_between_2_and_10",
        ]
    );
}
