// File: src/error.rs
// Purpose: Error type for form events

use rusty_auth_validation::ValidationErrors;
use thiserror::Error;

/// Everything a form event can be rejected with
///
/// Submission only ever fails with `ValidationFailure`; the other variants
/// reject string-keyed events that name nothing the form knows about.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("validation failed: {0}")]
    ValidationFailure(ValidationErrors),

    #[error("field `{field}` is not part of the {form} form")]
    UnknownField { form: &'static str, field: String },

    #[error("unknown social provider: {0}")]
    UnknownProvider(String),
}

impl FormError {
    /// Validation messages, empty for the other variants
    pub fn messages(&self) -> Vec<&str> {
        match self {
            FormError::ValidationFailure(errors) => errors.messages().collect(),
            _ => Vec::new(),
        }
    }
}
