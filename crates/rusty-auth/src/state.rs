// File: src/state.rs
// Purpose: Field values and UI flags owned by one form instance

use rusty_auth_validation::{Field, ValidationErrors};
use serde::Serialize;

/// Observable state of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Accepting input, popup closed
    Editing,
    /// Last submission failed and the popup is open
    ErrorShown,
    /// Submission accepted and navigation requested; terminal
    Submitted,
    /// Left through a social or inter-form link; terminal, values untouched
    Redirected,
}

impl Phase {
    /// Navigation away has been requested; no further events apply
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Submitted | Phase::Redirected)
    }
}

/// Field values plus the two UI flags of a form
///
/// Values keep the form's field order. The errors of the most recent
/// submission are stored here so the popup shows what was actually
/// submitted, not what the fields hold now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    values: Vec<(Field, String)>,
    password_visible: bool,
    error_popup_open: bool,
    errors: ValidationErrors,
}

impl FormState {
    /// Empty state holding `fields` in order
    pub fn new(fields: &[Field]) -> Self {
        Self {
            values: fields.iter().map(|&field| (field, String::new())).collect(),
            password_visible: false,
            error_popup_open: false,
            errors: ValidationErrors::new(),
        }
    }

    /// Current value of a field, `None` if the form has no such field
    pub fn value(&self, field: Field) -> Option<&str> {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| value.as_str())
    }

    /// Value of a field, empty when the form has no such field
    pub fn value_or_empty(&self, field: Field) -> &str {
        self.value(field).unwrap_or_default()
    }

    /// All values in field order
    pub fn values(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn contains(&self, field: Field) -> bool {
        self.values.iter().any(|(f, _)| *f == field)
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn error_popup_open(&self) -> bool {
        self.error_popup_open
    }

    /// Errors of the most recent failed submission
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Replace one value; returns false when the form has no such field
    pub(crate) fn set(&mut self, field: Field, value: String) -> bool {
        match self.values.iter_mut().find(|(f, _)| *f == field) {
            Some((_, slot)) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear_values(&mut self) {
        for (_, value) in &mut self.values {
            value.clear();
        }
    }

    pub(crate) fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub(crate) fn open_popup(&mut self, errors: ValidationErrors) {
        self.errors = errors;
        self.error_popup_open = !self.errors.is_empty();
    }

    pub(crate) fn close_popup(&mut self) {
        self.error_popup_open = false;
    }
}
