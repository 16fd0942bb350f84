// File: src/login.rs
// Purpose: Login form: email and password

use crate::form::{AuthForm, FormKind};
use crate::navigation::Route;
use crate::state::FormState;
use rusty_auth_validation::{Field, LoginFields};

/// Marker for the login form
#[derive(Debug, Clone, Copy, Default)]
pub struct Login;

impl FormKind for Login {
    type Fields = LoginFields;

    const NAME: &'static str = "login";
    const FIELDS: &'static [Field] = LoginFields::FIELDS;
    const ACTION_LABEL: &'static str = "Login";
    const PASSWORD_LABEL: &'static str = "Password:";
    const DISMISS_LABEL: &'static str = "Close";
    const LINK_ROUTE: Route = Route::Signup;
    const LINK_PROMPT: &'static str = "Don't have an account?";
    const LINK_TEXT: &'static str = "Sign up";

    fn fields(state: &FormState) -> LoginFields {
        LoginFields {
            email: state.value_or_empty(Field::Email).to_string(),
            password: state.value_or_empty(Field::Password).to_string(),
        }
    }
}

pub type LoginForm = AuthForm<Login>;
