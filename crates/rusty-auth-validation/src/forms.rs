//! Field sets of the two forms and their validation passes

use crate::{
    is_gender_selected, is_present, is_strong_password, is_valid_email, is_valid_mobile,
    passwords_match, Field, Validate, ValidationErrors,
};
use serde::{Deserialize, Serialize};

/// Raw login input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

impl LoginFields {
    /// Fields in the order they appear on the form
    pub const FIELDS: &'static [Field] = &[Field::Email, Field::Password];
}

impl Validate for LoginFields {
    fn validate(&self) -> Result<(), ValidationErrors> {
        ValidationErrors::from_checks([
            (Field::Email, is_valid_email(&self.email)),
            (Field::Password, is_strong_password(&self.password)),
        ])
        .into_result()
    }
}

/// Raw signup input
///
/// `gender` holds the selected radio value, empty while nothing is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub gender: String,
    pub mobile: String,
}

impl SignupFields {
    /// Fields in the order they appear on the form
    pub const FIELDS: &'static [Field] = &[
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Gender,
        Field::Mobile,
    ];
}

impl Validate for SignupFields {
    fn validate(&self) -> Result<(), ValidationErrors> {
        ValidationErrors::from_checks([
            (Field::Name, is_present(&self.name)),
            (Field::Email, is_valid_email(&self.email)),
            (Field::Password, is_strong_password(&self.password)),
            (
                Field::ConfirmPassword,
                passwords_match(&self.password, &self.confirm_password),
            ),
            (Field::Gender, is_gender_selected(&self.gender)),
            (Field::Mobile, is_valid_mobile(&self.mobile)),
        ])
        .into_result()
    }
}
