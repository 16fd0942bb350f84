//! Rusty-Auth-Validation
//!
//! Pure field rules for the login and signup forms. Every rule is a
//! stateless predicate over the raw input string; a validation pass runs all
//! rules for a form in a fixed order and collects every violation.
//!
//! ```rust
//! use rusty_auth_validation::{LoginFields, Validate};
//!
//! let fields = LoginFields {
//!     email: "a@b.com".to_string(),
//!     password: "Abcdef1!".to_string(),
//! };
//! assert!(fields.validate().is_ok());
//! ```

pub mod choice;
pub mod email;
pub mod field;
pub mod forms;
pub mod password;
pub mod phone;
pub mod string;

use serde::{Deserialize, Serialize};
use std::fmt;

// Re-export all validators
pub use choice::*;
pub use email::*;
pub use field::Field;
pub use forms::{LoginFields, SignupFields};
pub use password::*;
pub use phone::*;
pub use string::*;

/// Core validation trait implemented by both form field sets
pub trait Validate {
    /// Run every rule in field order.
    ///
    /// Returns `Ok(())` if all rules pass, otherwise every violation in the
    /// order the fields appear on the form.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// One violated rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    /// Error for `field` carrying the field's standard message
    pub fn new(field: Field) -> Self {
        Self {
            field,
            message: field.message().to_string(),
        }
    }
}

/// Ordered result of one validation pass
///
/// Never merged with a previous pass; each pass builds a fresh sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Collect the fields whose check failed, keeping the order of `checks`
    pub fn from_checks<I>(checks: I) -> Self
    where
        I: IntoIterator<Item = (Field, bool)>,
    {
        Self(
            checks
                .into_iter()
                .filter(|(_, valid)| !valid)
                .map(|(field, _)| FieldError::new(field))
                .collect(),
        )
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Messages in field order
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|error| error.message.as_str())
    }

    /// Check if a specific field failed
    pub fn has_error(&self, field: Field) -> bool {
        self.0.iter().any(|error| error.field == field)
    }

    /// `Ok(())` when empty, the sequence itself otherwise
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.messages().collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
