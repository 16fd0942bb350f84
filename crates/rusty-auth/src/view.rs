// File: src/view.rs
// Purpose: Full page markup for a form

use crate::config::Config;
use crate::form::{AuthForm, FormKind};
use crate::navigation::SocialProvider;
use crate::presenter::ErrorPresenter;
use crate::state::FormState;
use maud::{html, Markup};
use rusty_auth_validation::{Field, Gender};

/// Render a form page with its current values and, if open, the error popup
///
/// Buttons carry `data-action` (and `data-provider` for social buttons) so a
/// host can map clicks back to form events.
pub fn render_page<K: FormKind>(form: &AuthForm<K>, config: &Config) -> Markup {
    let state = form.state();
    let presenter = ErrorPresenter::new(&config.presenter);

    html! {
        div.auth-container data-form=(K::NAME) {
            form method="post" data-action="submit" {
                @for &field in K::FIELDS {
                    (render_field::<K>(field, state))
                }
                div.social-buttons {
                    button.submit type="submit" { (K::ACTION_LABEL) }
                    b { "OR" }
                    br;
                    @for provider in SocialProvider::ALL {
                        button
                            class=(provider.button_class())
                            type="button"
                            data-action="social"
                            data-provider=(provider.name()) {
                            (K::ACTION_LABEL) " with " (provider.name())
                        }
                    }
                }
                p.forgot-password {
                    a href="#" { "Forgot password?" }
                }
                div.signup-link {
                    (K::LINK_PROMPT) " "
                    a href=(config.routes.path(K::LINK_ROUTE)) data-action="link" { (K::LINK_TEXT) }
                }
            }
            @if let Some(popup) = presenter.render(state, K::DISMISS_LABEL) {
                (popup)
            }
        }
    }
}

fn render_field<K: FormKind>(field: Field, state: &FormState) -> Markup {
    let value = state.value_or_empty(field);

    let label = match field {
        Field::Password => K::PASSWORD_LABEL,
        other => other.label(),
    };

    html! {
        div.form-group {
            @if field == Field::Gender {
                label { (label) }
                div.gender-input {
                    @for gender in Gender::ALL {
                        input
                            type="radio"
                            id=(gender.value())
                            name=(field.name())
                            value=(gender.value())
                            checked[value == gender.value()];
                        label for=(gender.value()) { (gender.label()) }
                    }
                }
            } @else {
                label for=(field.name()) { (label) }
                @if field == Field::Password {
                    div.password-input {
                        input
                            type=(if state.password_visible() { "text" } else { "password" })
                            id=(field.name())
                            name=(field.name())
                            value=(value);
                        i class={
                            "password-toggle fas "
                            (if state.password_visible() { "fa-eye-slash" } else { "fa-eye" })
                        } data-action="toggle-password" {}
                    }
                } @else {
                    input
                        type=(input_type(field))
                        id=(field.name())
                        name=(field.name())
                        value=(value);
                }
            }
        }
    }
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        Field::Password | Field::ConfirmPassword => "password",
        Field::Name | Field::Gender | Field::Mobile => "text",
    }
}
