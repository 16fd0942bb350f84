// File: src/signup.rs
// Purpose: Signup form: name, email, passwords, gender, mobile

use crate::form::{AuthForm, FormKind};
use crate::navigation::Route;
use crate::state::FormState;
use rusty_auth_validation::{Field, SignupFields};

/// Marker for the signup form
#[derive(Debug, Clone, Copy, Default)]
pub struct Signup;

impl FormKind for Signup {
    type Fields = SignupFields;

    const NAME: &'static str = "signup";
    const FIELDS: &'static [Field] = SignupFields::FIELDS;
    const ACTION_LABEL: &'static str = "Signup";
    const PASSWORD_LABEL: &'static str = "Create Password:";
    const DISMISS_LABEL: &'static str = "Got it";
    const LINK_ROUTE: Route = Route::Login;
    const LINK_PROMPT: &'static str = "Already have an account?";
    const LINK_TEXT: &'static str = "Login";

    fn fields(state: &FormState) -> SignupFields {
        let value = |field| state.value_or_empty(field).to_string();
        SignupFields {
            name: value(Field::Name),
            email: value(Field::Email),
            password: value(Field::Password),
            confirm_password: value(Field::ConfirmPassword),
            gender: value(Field::Gender),
            mobile: value(Field::Mobile),
        }
    }
}

pub type SignupForm = AuthForm<Signup>;
