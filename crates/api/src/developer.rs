//! Developer record and its intake rules

use serde::Deserialize;

use roster_validator::prelude::*;

use crate::error::SetupError;

/// The inbound developer payload.
///
/// Both fields are optional on the wire; validation decides whether an
/// omitted field is acceptable (it is not, for `firstName`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Developer {
    /// Given name; required, 2–10 letters.
    pub first_name: Option<String>,
    /// Contact address; must look like an email.
    pub email: Option<String>,
}

impl Developer {
    fn first_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or("")
    }

    fn email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }
}

/// Builds the developer intake validator.
///
/// FirstName chains presence → length → letters-only under short-circuit
/// (each later rule assumes the earlier ones passed); Email carries a
/// single format rule. Failure codes are the stable identifiers clients
/// localize against.
///
/// # Errors
///
/// Returns a [`SetupError`] if the rule configuration is malformed; callers
/// treat that as fatal at startup.
pub fn developer_validator() -> Result<Validator<Developer>, SetupError> {
    let validator = Validator::builder()
        .field(
            "FirstName",
            Developer::first_name,
            RuleSet::short_circuit()
                .rule(not_empty().with_code("required_first_name"))
                .rule(
                    length_between(2, 10)?
                        .with_code("first_name_length_should_be_between_2_and_10"),
                )
                .rule(alphabetic().with_code("first_name_should_be_characters_only")),
        )
        .field(
            "Email",
            Developer::email,
            RuleSet::short_circuit().rule(email().with_code("email_invalid_email")),
        )
        .build()?;

    Ok(validator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_is_well_formed() {
        let validator = developer_validator().unwrap();
        let names: Vec<_> = validator.field_names().collect();
        assert_eq!(names, vec!["FirstName", "Email"]);
    }

    #[test]
    fn camel_case_payloads_deserialize() {
        let developer: Developer =
            serde_json::from_str(r#"{"firstName": "Al", "email": "al@example.com"}"#).unwrap();
        assert_eq!(developer.first_name(), "Al");
        assert_eq!(developer.email(), "al@example.com");
    }

    #[test]
    fn omitted_fields_read_as_empty() {
        let developer: Developer = serde_json::from_str("{}").unwrap();
        assert_eq!(developer.first_name(), "");
        assert_eq!(developer.email(), "");
    }
}
