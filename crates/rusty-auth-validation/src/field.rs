//! Form field identifiers and their messages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every field either form can carry, in signup order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Gender,
    Mobile,
}

pub const PASSWORD_MESSAGE: &str = "Please enter a password with at least 8 characters, \
including at least one uppercase letter, one lowercase letter, one digit, and one special \
symbol (!@#$%^&*)";

impl Field {
    /// Input name used in markup and in string-keyed events
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Gender => "gender",
            Field::Mobile => "mobile",
        }
    }

    /// Label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name:",
            Field::Email => "Email:",
            Field::Password => "Password:",
            Field::ConfirmPassword => "Confirm Password:",
            Field::Gender => "Gender:",
            Field::Mobile => "Mobile Number:",
        }
    }

    /// Message reported when the field's rule fails
    pub fn message(self) -> &'static str {
        match self {
            Field::Name => "Please enter your name",
            Field::Email => "Please enter a valid email address",
            Field::Password => PASSWORD_MESSAGE,
            Field::ConfirmPassword => "Passwords do not match",
            Field::Gender => "Please select your gender",
            Field::Mobile => "Please enter a valid 10-digit mobile number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "password" => Ok(Field::Password),
            "confirmPassword" => Ok(Field::ConfirmPassword),
            "gender" => Ok(Field::Gender),
            "mobile" => Ok(Field::Mobile),
            other => Err(UnknownField(other.to_string())),
        }
    }
}
