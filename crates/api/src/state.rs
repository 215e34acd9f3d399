//! Shared application state

use std::sync::Arc;

use roster_validator::record::Validator;

use crate::developer::{Developer, developer_validator};
use crate::error::SetupError;

/// State shared across handlers.
///
/// The validator is built once at startup and shared by reference: it is
/// immutable after construction, so concurrent handlers read it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    validator: Arc<Validator<Developer>>,
}

impl AppState {
    /// Builds the state, constructing the developer validator.
    ///
    /// # Errors
    ///
    /// Returns a [`SetupError`] when the rule configuration is malformed.
    pub fn new() -> Result<Self, SetupError> {
        Ok(Self {
            validator: Arc::new(developer_validator()?),
        })
    }

    /// The shared developer validator.
    #[must_use]
    pub fn validator(&self) -> &Validator<Developer> {
        &self.validator
    }
}
